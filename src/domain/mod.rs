//! Доменная модель: карты, колода, рука и её численная сила.
//!
//! Карты и колода принадлежат "сдающему" коллаборатору; ядро оценки
//! (crate::eval) лишь потребляет готовую руку из пяти карт.

pub mod card;
pub mod deck;
pub mod hand;

/// RNG интерфейс для перемешивания колоды.
/// Реализации живут в infra (обёртки над `rand`); сюда источник
/// случайности всегда передаётся явно — так раздачи воспроизводимы.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use hand::*;
