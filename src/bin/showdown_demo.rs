// src/bin/showdown_demo.rs

use poker_showdown::api::build_showdown_report;
use poker_showdown::domain::card::{Card, Rank, Suit};
use poker_showdown::domain::deck::Deck;
use poker_showdown::domain::hand::Hand;
use poker_showdown::eval::{evaluate_hand, ShowdownOutcome};
use poker_showdown::infra::{DeterministicRng, SystemRng};

fn main() {
    println!("showdown_demo: стартуем демонстрацию оценки рук…");

    // 1. Показательные руки с фиксированными картами.
    let broadway = Hand::new([
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::King, Suit::Diamonds),
        Card::new(Rank::Queen, Suit::Spades),
        Card::new(Rank::Jack, Suit::Clubs),
        Card::new(Rank::Ten, Suit::Hearts),
    ]);
    let full_house = Hand::new([
        Card::new(Rank::King, Suit::Hearts),
        Card::new(Rank::King, Suit::Diamonds),
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Ten, Suit::Clubs),
        Card::new(Rank::Ten, Suit::Hearts),
    ]);

    println!();
    println!("================ SHOWCASE HANDS =================");
    print_hand("Player 1", &broadway);
    print_hand("Player 2", &full_house);
    announce_winner(&broadway, &full_house);

    // 2. Случайная раздача. С аргументом-числом — детерминированная:
    //    `showdown_demo 42` всегда даёт одну и ту же пару рук.
    let seed = std::env::args().nth(1).and_then(|s| s.parse::<u64>().ok());

    let mut deck = Deck::standard_52();
    match seed {
        Some(seed) => {
            println!();
            println!("[CLI] Перемешиваем колоду детерминированно, seed={seed}.");
            let mut rng = DeterministicRng::from_seed(seed);
            deck.shuffle_with(&mut rng);
        }
        None => {
            println!();
            println!("[CLI] Перемешиваем колоду системным RNG.");
            let mut rng = SystemRng::default();
            deck.shuffle_with(&mut rng);
        }
    }

    let first = deck.deal_hand().expect("в полной колоде хватает карт");
    let second = deck.deal_hand().expect("в полной колоде хватает карт");

    println!();
    println!("================ RANDOM DEAL =================");
    print_hand("Player 1", &first);
    print_hand("Player 2", &second);
    announce_winner(&first, &second);

    // 3. Полный отчёт для фронта — тем же DTO, что и API.
    let report = build_showdown_report(&first, &second);
    println!();
    println!("[CLI] JSON-отчёт о шоудауне:");
    println!(
        "{}",
        serde_json::to_string_pretty(&report).expect("отчёт сериализуем")
    );

    println!();
    println!("[CLI] Завершение работы showdown_demo.");
}

/// Печать руки: карты по одной строке, затем категория и счёт.
fn print_hand(title: &str, hand: &Hand) {
    println!();
    println!("------ {title} ------");
    for card in hand.cards() {
        println!("Card: Rank {}, Suit {}", card.rank.name(), card.suit.name());
    }

    let evaluation = evaluate_hand(hand);
    println!(
        "Hand evaluation: {} (score {})",
        evaluation.category,
        evaluation.score.0
    );
}

fn announce_winner(first: &Hand, second: &Hand) {
    let report = build_showdown_report(first, second);
    match report.outcome {
        ShowdownOutcome::FirstWins => println!("Player 1 win"),
        ShowdownOutcome::SecondWins => println!("Player 2 win"),
        ShowdownOutcome::Tie => println!("Tie"),
    }
}
