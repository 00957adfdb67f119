// src/bin/showdown_stress.rs

use poker_showdown::domain::deck::Deck;
use poker_showdown::domain::hand::Hand;
use poker_showdown::eval::{compare_hands, evaluate_hand, HandCategory, ShowdownOutcome};
use poker_showdown::infra::DeterministicRng;

fn main() {
    println!("showdown_stress: стартуем стресс-прогон оценки рук…");

    // Параметры нагрузки — можно смело крутить.
    const NUM_DEALS: u64 = 200_000; // сколько раздач (по 2 руки каждая)
    const SEED: u64 = 20_240_817;   // фиксированный seed — прогон воспроизводим

    let mut rng = DeterministicRng::from_seed(SEED);

    // Статистика по категориям: индекс = strength (1..=9).
    let mut category_counts = [0u64; 10];
    let mut first_wins: u64 = 0;
    let mut second_wins: u64 = 0;
    let mut ties: u64 = 0;

    for deal in 0..NUM_DEALS {
        let mut deck = Deck::standard_52();
        deck.shuffle_with(&mut rng);

        let first = deck.deal_hand().expect("в полной колоде хватает карт");
        let second = deck.deal_hand().expect("в полной колоде хватает карт");

        let first_eval = evaluate_hand(&first);
        let second_eval = evaluate_hand(&second);

        category_counts[first_eval.category.strength() as usize] += 1;
        category_counts[second_eval.category.strength() as usize] += 1;

        // Оценка не зависит от входного порядка карт.
        let mut reversed = *first.cards();
        reversed.reverse();
        let reversed_eval = evaluate_hand(&Hand::new(reversed));
        if reversed_eval.score != first_eval.score {
            eprintln!(
                "[STRESS][deal={deal}] НАРУШЕНИЕ: счёт зависит от порядка карт ({} vs {})",
                first_eval.score.0, reversed_eval.score.0
            );
            std::process::exit(1);
        }

        // Сравнение антисимметрично.
        let forward = compare_hands(&first, &second);
        let backward = compare_hands(&second, &first);
        let consistent = matches!(
            (forward, backward),
            (ShowdownOutcome::FirstWins, ShowdownOutcome::SecondWins)
                | (ShowdownOutcome::SecondWins, ShowdownOutcome::FirstWins)
                | (ShowdownOutcome::Tie, ShowdownOutcome::Tie)
        );
        if !consistent {
            eprintln!(
                "[STRESS][deal={deal}] НАРУШЕНИЕ: сравнение не антисимметрично ({forward:?} / {backward:?})"
            );
            std::process::exit(1);
        }

        match forward {
            ShowdownOutcome::FirstWins => first_wins += 1,
            ShowdownOutcome::SecondWins => second_wins += 1,
            ShowdownOutcome::Tie => ties += 1,
        }
    }

    println!();
    println!("[STRESS] Раздач: {NUM_DEALS}, рук оценено: {}.", NUM_DEALS * 2);
    println!("[STRESS] Исходы: first={first_wins}, second={second_wins}, tie={ties}.");
    println!();
    println!("[STRESS] Частоты категорий:");

    const CATEGORIES: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];
    let total_hands = (NUM_DEALS * 2) as f64;
    for category in CATEGORIES {
        let count = category_counts[category.strength() as usize];
        println!(
            "[STRESS]   {:<16} {:>8}  ({:.4}%)",
            category.label(),
            count,
            count as f64 / total_hands * 100.0
        );
    }

    println!();
    println!("[STRESS] Прогон завершён без нарушений.");
}
