use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::Card;

/// Размер покерной руки. Вся позиционная логика оценки рассчитана
/// ровно на пять карт.
pub const HAND_SIZE: usize = 5;

/// Ошибки уровня руки.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandError {
    #[error("В руке должно быть ровно 5 карт, получено {0}")]
    InvalidHandSize(usize),
}

/// Рука из ровно пяти карт, в произвольном порядке.
///
/// Инвариант "ровно 5 карт" обеспечивается конструкторами: из массива
/// рука строится всегда, из среза — только если длина равна 5
/// (fail fast, см. HandError::InvalidHandSize).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    pub const fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    /// Построить руку из среза. Единственная невосстановимая ошибка
    /// всей оценки — неверное число карт, и ловится она здесь.
    pub fn from_slice(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| HandError::InvalidHandSize(cards.len()))?;
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Отсортировать руку по неубыванию ранга.
    ///
    /// Сортировка стабильная: карты равного ранга сохраняют исходный
    /// относительный порядок, поэтому выбор кикеров детерминирован.
    /// Это единственное место в крейте, где карты переупорядочиваются.
    pub fn sorted(&self) -> SortedHand {
        let mut cards = self.cards;
        cards.sort_by_key(|c| c.rank);
        SortedHand { cards }
    }
}

/// Рука, карты которой уже упорядочены по неубыванию ранга.
///
/// Все структурные проверки и подсчёт очков принимают именно этот тип:
/// предусловие "рука отсортирована" выражено типом, а не соглашением.
/// Получить SortedHand можно только через Hand::sorted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortedHand {
    cards: [Card; HAND_SIZE],
}

impl SortedHand {
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }
}

/// Итоговая численная сила руки.
///
/// Просто u64 с тотальным порядком — кодирование заполняет eval
/// (см. eval::hand_score). Сравнение двух рук = сравнение двух HandScore.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct HandScore(pub u64);
