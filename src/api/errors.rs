use serde::{Deserialize, Serialize};

use crate::domain::hand::HandError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битая строка карты).
    BadRequest(String),

    /// Неверный размер руки.
    InvalidHand(String),
}

impl From<HandError> for ApiError {
    fn from(err: HandError) -> Self {
        ApiError::InvalidHand(err.to_string())
    }
}
