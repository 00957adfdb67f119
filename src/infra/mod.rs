//! Инфраструктурный слой: реализации RandomSource поверх `rand`.
//! Сам интерфейс объявлен у потребителя (crate::domain).

pub mod rng;

pub use rng::*;
