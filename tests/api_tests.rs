//! Тесты внешнего контракта: парсинг рук и DTO-отчёты.

use poker_showdown::api::{build_showdown_report, parse_hand, ApiError, ShowdownReportDto};
use poker_showdown::domain::card::{Card, Rank, Suit};
use poker_showdown::eval::ShowdownOutcome;

#[test]
fn parse_hand_accepts_valid_string() {
    let hand = parse_hand("Ah Kd Qs Jc Th").expect("valid hand string");

    assert_eq!(hand.cards()[0], Card::new(Rank::Ace, Suit::Hearts));
    assert_eq!(hand.cards()[4], Card::new(Rank::Ten, Suit::Hearts));
}

#[test]
fn parse_hand_rejects_bad_card_token() {
    let err = parse_hand("Ah Kd Qs Jc Xx").unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[test]
fn parse_hand_rejects_wrong_card_count() {
    let err = parse_hand("Ah Kd Qs Jc").unwrap_err();
    assert!(matches!(err, ApiError::InvalidHand(_)));

    let err = parse_hand("Ah Kd Qs Jc Th 9h").unwrap_err();
    assert!(matches!(err, ApiError::InvalidHand(_)));
}

#[test]
fn showdown_report_carries_labels_scores_and_outcome() {
    // Фулл-хаус против стрита: побеждает первая рука.
    let full_house = parse_hand("Kh Kd Ks Tc Th").unwrap();
    let straight = parse_hand("Th Jc Qs Kd Ah").unwrap();

    let report = build_showdown_report(&full_house, &straight);

    assert_eq!(report.first.category, "Full house");
    assert_eq!(report.second.category, "Straight");
    assert_eq!(report.outcome, ShowdownOutcome::FirstWins);
    assert!(report.first.score > report.second.score);

    // Карты отдаются строками в исходном порядке руки.
    assert_eq!(report.first.cards, vec!["Kh", "Kd", "Ks", "Tc", "Th"]);
}

#[test]
fn showdown_report_roundtrips_through_json() {
    let first = parse_hand("9c 9d Kh Ks 4c").unwrap();
    let second = parse_hand("2h 7h 9h Jh Ah").unwrap();

    let report = build_showdown_report(&first, &second);

    let json = serde_json::to_string(&report).expect("report serializes");
    let decoded: ShowdownReportDto = serde_json::from_str(&json).expect("report deserializes");

    assert_eq!(decoded, report);
}
