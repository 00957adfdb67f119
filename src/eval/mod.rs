//! Ядро оценки пятикарточных рук.
//!
//! Конвейер: SortedHand → классификация по сигнатуре количеств →
//! базово-14 счёт → сравнение.
//!
//! Основные функции:
//!   - `evaluate_hand(&Hand) -> HandEvaluation`
//!   - `compare_hands(&Hand, &Hand) -> ShowdownOutcome`

pub mod evaluator;
pub mod hand_score;
pub mod signature;

pub use evaluator::{
    classify, compare_hands, compare_scores, evaluate_cards, evaluate_hand, score_hand,
    HandEvaluation, ShowdownOutcome,
};
pub use hand_score::{HandCategory, CATEGORY_WEIGHT, SCORE_BASE};
