//! Внешний контракт крейта: парсинг рук из строк и отчёты-DTO
//! для отображающего коллаборатора.

pub mod dto;
pub mod errors;

pub use dto::{build_hand_report, build_showdown_report, HandReportDto, ShowdownReportDto};
pub use errors::ApiError;

use crate::domain::card::Card;
use crate::domain::hand::Hand;

/// Разобрать руку из строки вида "Ah Kd Qs Jc Th".
///
/// Карты разделяются пробелами; ошибка формата карты или неверное
/// число карт отдаются как ApiError.
pub fn parse_hand(input: &str) -> Result<Hand, ApiError> {
    let cards = input
        .split_whitespace()
        .map(|token| token.parse::<Card>().map_err(ApiError::BadRequest))
        .collect::<Result<Vec<_>, _>>()?;

    Hand::from_slice(&cards).map_err(ApiError::from)
}
