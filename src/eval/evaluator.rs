use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank};
use crate::domain::hand::{Hand, HandError, HandScore, SortedHand};

use super::hand_score::HandCategory;
use super::signature::{is_flush, RankSignature};

/// Результат оценки руки: категория для отображения, счёт для сравнения.
///
/// Категория хранится отдельно, потому что из счёта она не восстановима
/// (см. eval::hand_score).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvaluation {
    pub category: HandCategory,
    pub score: HandScore,
}

/// Определить категорию отсортированной руки.
///
/// Сырые признаки не взаимоисключающи (стрит-флеш — одновременно и
/// стрит, и флеш), поэтому порядок проверок обязателен: от самой
/// специфичной категории к самой общей.
pub fn classify(hand: &SortedHand) -> HandCategory {
    let sig = RankSignature::of(hand);
    classify_with(hand, &sig)
}

fn classify_with(hand: &SortedHand, sig: &RankSignature) -> HandCategory {
    let flush = is_flush(hand);
    let straight = sig.straight_high().is_some();
    let pattern = sig.pattern();

    if straight && flush {
        return HandCategory::StraightFlush;
    }
    if pattern == [4, 1] {
        return HandCategory::FourOfAKind;
    }
    if pattern == [3, 2] {
        return HandCategory::FullHouse;
    }
    if flush {
        return HandCategory::Flush;
    }
    if straight {
        return HandCategory::Straight;
    }
    if pattern == [3, 1, 1] {
        return HandCategory::ThreeOfAKind;
    }
    if pattern == [2, 2, 1] {
        return HandCategory::TwoPair;
    }
    if pattern == [2, 1, 1, 1] {
        return HandCategory::OnePair;
    }
    HandCategory::HighCard
}

/// Подсчитать счёт отсортированной руки при известной категории.
///
/// Кикеры берутся из групп сигнатуры (количество по убыванию, затем
/// ранг по убыванию), поэтому любая позиционная раскладка пары, двух
/// пар, тройки или каре в отсортированной руке даёт один и тот же
/// порядок кикеров.
pub fn score_hand(hand: &SortedHand, category: HandCategory) -> HandScore {
    let sig = RankSignature::of(hand);
    score_with(hand, category, &sig)
}

fn score_with(hand: &SortedHand, category: HandCategory, sig: &RankSignature) -> HandScore {
    let groups = sig.groups();

    let kickers: Vec<Rank> = match category {
        // Все пять рангов по убыванию; рука отсортирована по возрастанию,
        // так что старшая карта получает старший разряд.
        HandCategory::StraightFlush
        | HandCategory::Straight
        | HandCategory::Flush
        | HandCategory::HighCard => hand.cards().iter().rev().map(|c| c.rank).collect(),

        // Каре, затем одиночный кикер.
        HandCategory::FourOfAKind => vec![groups[0].rank, groups[1].rank],

        // Тройка, затем пара.
        HandCategory::FullHouse => vec![groups[0].rank, groups[1].rank],

        // Тройка, затем два кикера по убыванию.
        HandCategory::ThreeOfAKind => vec![groups[0].rank, groups[1].rank, groups[2].rank],

        // Старшая пара, младшая пара, одиночный кикер.
        HandCategory::TwoPair => vec![groups[0].rank, groups[1].rank, groups[2].rank],

        // Пара, затем три кикера по убыванию.
        HandCategory::OnePair => vec![
            groups[0].rank,
            groups[1].rank,
            groups[2].rank,
            groups[3].rank,
        ],
    };

    HandScore::from_category_and_kickers(category, &kickers)
}

/// Полная оценка руки: сортировка, классификация, подсчёт очков.
///
/// Детерминирована относительно мультимножества карт: любой входной
/// порядок даёт одинаковые категорию и счёт.
pub fn evaluate_hand(hand: &Hand) -> HandEvaluation {
    let sorted = hand.sorted();
    let sig = RankSignature::of(&sorted);
    let category = classify_with(&sorted, &sig);
    let score = score_with(&sorted, category, &sig);
    HandEvaluation { category, score }
}

/// Оценка произвольного среза карт: сначала проверка размера (fail
/// fast), затем обычная оценка.
pub fn evaluate_cards(cards: &[Card]) -> Result<HandEvaluation, HandError> {
    let hand = Hand::from_slice(cards)?;
    Ok(evaluate_hand(&hand))
}

/// Трёхзначный исход сравнения двух рук.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ShowdownOutcome {
    FirstWins,
    SecondWins,
    Tie,
}

/// Сравнить два счёта обычным числовым порядком.
pub fn compare_scores(first: HandScore, second: HandScore) -> ShowdownOutcome {
    use core::cmp::Ordering;

    match first.cmp(&second) {
        Ordering::Greater => ShowdownOutcome::FirstWins,
        Ordering::Less => ShowdownOutcome::SecondWins,
        Ordering::Equal => ShowdownOutcome::Tie,
    }
}

/// Шоудаун двух рук: оценить обе и сравнить счёт.
pub fn compare_hands(first: &Hand, second: &Hand) -> ShowdownOutcome {
    compare_scores(evaluate_hand(first).score, evaluate_hand(second).score)
}
