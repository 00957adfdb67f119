use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;
use crate::domain::hand::HandScore;

/// Категория покерной руки по силе.
///
/// Числовое значение категории — старший разряд итогового счёта.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl HandCategory {
    /// Вес категории в счёте: HighCard = 1, ..., StraightFlush = 9.
    pub fn strength(self) -> u64 {
        self as u64
    }

    /// Человеческое название категории.
    pub fn label(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High card",
            HandCategory::OnePair => "One pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Основание позиционной системы счёта. Ранги лежат в 2..=14,
/// поэтому соседние кикерные разряды не пересекаются по порядку:
/// разброс младших разрядов 12 * (14^k - 1) / 13 < 14^k.
pub const SCORE_BASE: u64 = 14;

/// Вес категории: 14^5. Всё, что младше, — кикеры.
pub const CATEGORY_WEIGHT: u64 = SCORE_BASE.pow(5);

impl HandScore {
    /// Собрать счёт из категории и кикеров (от важнейшего к слабейшему).
    ///
    /// score = strength * 14^5 + k0 * 14^4 + k1 * 14^3 + ...
    ///
    /// Кикеров может быть меньше пяти (каре и фулл-хаус задают только
    /// два) — незанятые младшие разряды остаются нулевыми.
    ///
    /// Категория из счёта обратно не извлекается: ранг туза равен
    /// основанию системы, и деление на 14^5 для сильных кикеров даёт
    /// соседнюю категорию. Поэтому результат оценки всегда несёт
    /// категорию отдельным полем (HandEvaluation).
    pub fn from_category_and_kickers(category: HandCategory, kickers: &[Rank]) -> Self {
        debug_assert!(kickers.len() <= 5, "не больше пяти кикерных разрядов");

        let mut value = category.strength() * CATEGORY_WEIGHT;
        let mut weight = CATEGORY_WEIGHT / SCORE_BASE; // 14^4
        for &kicker in kickers {
            value += kicker.value() as u64 * weight;
            weight /= SCORE_BASE;
        }
        HandScore(value)
    }
}
