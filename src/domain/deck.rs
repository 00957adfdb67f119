use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::hand::{Hand, HAND_SIZE};
use crate::domain::RandomSource;

/// Колода карт — упорядоченный список, раздача идёт с конца.
/// Перемешивание выполняется только через внешний RandomSource,
/// никакого глобального сидирования внутри.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Перемешать колоду внешним источником случайности.
    pub fn shuffle_with<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
    }

    /// Взять одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Взять n карт сверху.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        let mut taken = Vec::with_capacity(n);
        for _ in 0..n {
            if let Some(card) = self.cards.pop() {
                taken.push(card);
            } else {
                break;
            }
        }
        taken
    }

    /// Сдать руку из пяти карт. None, если карт в колоде не хватает —
    /// за исчерпание колоды отвечает сдающий, а не оценка.
    pub fn deal_hand(&mut self) -> Option<Hand> {
        if self.len() < HAND_SIZE {
            return None;
        }
        let cards = self.draw_n(HAND_SIZE);
        Hand::from_slice(&cards).ok()
    }
}
