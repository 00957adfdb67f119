//! RNG tests for poker-showdown
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие колод
//! - отсутствие повторяющихся карт после перемешивания
//! - воспроизводимость сдачи и оценки при одном seed
//! - работу Deck + shuffle_with + RandomSource

use poker_showdown::domain::deck::Deck;
use poker_showdown::domain::RandomSource;
use poker_showdown::eval::evaluate_hand;
use poker_showdown::infra::{DeterministicRng, SystemRng};

//
// TEST 1 — DeterministicRng reproducibility
//
#[test]
fn deterministic_rng_same_seed_same_shuffle() {
    let mut r1 = DeterministicRng::from_seed(123);
    let mut r2 = DeterministicRng::from_seed(123);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_eq!(a, b, "Same seed must produce identical shuffle");
}

//
// TEST 2 — different seeds produce different shuffle
//
#[test]
fn deterministic_rng_different_seeds_different_shuffle() {
    let mut r1 = DeterministicRng::from_seed(111);
    let mut r2 = DeterministicRng::from_seed(222);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_ne!(a, b, "Different seeds must produce different shuffle");
}

//
// TEST 3 — no duplicate cards after shuffle
//
#[test]
fn shuffle_produces_no_duplicates() {
    let mut rng = DeterministicRng::from_seed(555);

    let mut deck = Deck::standard_52();
    deck.shuffle_with(&mut rng);

    let mut cards = deck.cards.clone();
    cards.sort_by_key(|c| (c.rank.value(), c.suit.name()));
    cards.dedup();

    assert_eq!(cards.len(), 52, "Shuffled deck must contain 52 unique cards");
}

//
// TEST 4 — Deck::shuffle_with + RandomSource works correctly
//
#[test]
fn deck_shuffle_works() {
    let mut deck = Deck::standard_52();
    let mut rng = DeterministicRng::from_seed(999);

    deck.shuffle_with(&mut rng);

    assert_eq!(deck.cards.len(), 52);
    assert_ne!(deck.cards, Deck::standard_52().cards);
}

//
// TEST 5 — SystemRng and DeterministicRng produce different outputs
//
#[test]
fn systemrng_vs_deterministic_rng_are_not_equal() {
    let mut sys = SystemRng::default();
    let mut det = DeterministicRng::from_seed(12345);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    sys.shuffle(&mut a);
    det.shuffle(&mut b);

    assert_ne!(a, b, "SystemRng should differ from deterministic RNG");
}

//
// TEST 6 — same seed → same deal → same evaluation
//
#[test]
fn seeded_deal_is_fully_reproducible() {
    let deal = |seed: u64| {
        let mut deck = Deck::standard_52();
        let mut rng = DeterministicRng::from_seed(seed);
        deck.shuffle_with(&mut rng);
        let first = deck.deal_hand().expect("deal first hand");
        let second = deck.deal_hand().expect("deal second hand");
        (first, second)
    };

    let (a1, a2) = deal(777);
    let (b1, b2) = deal(777);

    assert_eq!(a1, b1, "Same seed must deal identical first hand");
    assert_eq!(a2, b2, "Same seed must deal identical second hand");

    assert_eq!(evaluate_hand(&a1), evaluate_hand(&b1));
    assert_eq!(evaluate_hand(&a2), evaluate_hand(&b2));
}

//
// TEST 7 — shuffle on empty slice must not crash
//
#[test]
fn shuffle_empty_slice_ok() {
    let mut rng = DeterministicRng::from_seed(42);
    let mut arr: Vec<u32> = vec![];
    rng.shuffle(&mut arr);
    assert!(arr.is_empty());
}

//
// TEST 8 — shuffle on 1-element slice must remain the same
//
#[test]
fn shuffle_one_element_ok() {
    let mut rng = DeterministicRng::from_seed(42);
    let mut arr = vec![123];
    rng.shuffle(&mut arr);
    assert_eq!(arr, vec![123]);
}

//
// TEST 9 — 1,000 shuffles must never panic
//
#[test]
fn stress_shuffle_many_times() {
    let mut rng = DeterministicRng::from_seed(77777);

    for _ in 0..1000 {
        let mut deck = Deck::standard_52();
        deck.shuffle_with(&mut rng);

        assert_eq!(deck.len(), 52);
    }
}
