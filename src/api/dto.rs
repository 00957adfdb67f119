use serde::{Deserialize, Serialize};

use crate::domain::hand::Hand;
use crate::eval::{compare_scores, evaluate_hand, HandEvaluation, ShowdownOutcome};

/// DTO одной руки для фронта: карты строками ("Ah"), категория
/// человеческим названием, счёт числом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandReportDto {
    pub cards: Vec<String>,
    pub category: String,
    pub score: u64,
}

/// DTO шоудауна двух рук.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowdownReportDto {
    pub first: HandReportDto,
    pub second: HandReportDto,
    pub outcome: ShowdownOutcome,
}

/// Построить DTO руки из уже готовой оценки.
pub fn build_hand_report(hand: &Hand, evaluation: &HandEvaluation) -> HandReportDto {
    HandReportDto {
        cards: hand.cards().iter().map(|c| c.to_string()).collect(),
        category: evaluation.category.label().to_string(),
        score: evaluation.score.0,
    }
}

/// Оценить обе руки и собрать полный отчёт о шоудауне.
pub fn build_showdown_report(first: &Hand, second: &Hand) -> ShowdownReportDto {
    let first_eval = evaluate_hand(first);
    let second_eval = evaluate_hand(second);
    let outcome = compare_scores(first_eval.score, second_eval.score);

    ShowdownReportDto {
        first: build_hand_report(first, &first_eval),
        second: build_hand_report(second, &second_eval),
        outcome,
    }
}
