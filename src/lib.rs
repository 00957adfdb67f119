//! poker-showdown: классификация и сравнение пятикарточных покерных рук.
//!
//! Ядро — чистая синхронная функция над ровно пятью картами:
//! Hand → сортировка → категория → счёт → сравнение. Никакого
//! состояния между вызовами, никакого I/O; колода и отображение —
//! отдельные коллабораторы вокруг ядра.

pub mod api;
pub mod domain;
pub mod eval;
pub mod infra;
