use crate::domain::card::Rank;
use crate::domain::hand::SortedHand;

/// Битовая маска рангов.
///
/// Используем 13 бит (от 2 до A):
/// бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Маски всех поддерживаемых стритов (5 рангов подряд).
/// Индексация по старшей карте, от шестёрки до туза.
///
/// Колесо (A2345) здесь сознательно отсутствует: туз кодируется
/// как 14 везде, в том числе в подсчёте очков, и "низким" не бывает.
pub const STRAIGHT_MASKS: [RankMask; 9] = [
    // 23456
    mask_from_ranks(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six]),
    // 34567
    mask_from_ranks(&[Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven]),
    // 45678
    mask_from_ranks(&[Rank::Four, Rank::Five, Rank::Six, Rank::Seven, Rank::Eight]),
    // 56789
    mask_from_ranks(&[Rank::Five, Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine]),
    // 6789T
    mask_from_ranks(&[Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten]),
    // 789TJ
    mask_from_ranks(&[Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack]),
    // 89TJQ
    mask_from_ranks(&[Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen]),
    // 9TJQK
    mask_from_ranks(&[Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King]),
    // TJQKA (broadway)
    mask_from_ranks(&[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]),
];

/// Получить битовую маску для одного ранга.
pub fn rank_to_bit(rank: Rank) -> RankMask {
    let idx = (rank as u8).saturating_sub(2); // Rank::Two = 2
    1u16 << idx
}

/// Построить маску из списка рангов.
pub const fn mask_from_ranks(ranks: &[Rank]) -> RankMask {
    let mut mask: RankMask = 0;
    let mut i = 0;
    while i < ranks.len() {
        let r = ranks[i] as u8;
        let idx = r.saturating_sub(2);
        mask |= 1 << idx;
        i += 1;
    }
    mask
}

/// Найти стрит в битовой маске рангов.
/// Возвращает старшую карту стрита, если он есть.
pub fn detect_straight(rank_mask: RankMask) -> Option<Rank> {
    // Проверяем от самого сильного (broadway) к слабейшему.
    for (i, sm) in STRAIGHT_MASKS.iter().enumerate().rev() {
        if rank_mask & sm == *sm {
            return Some(match i {
                0 => Rank::Six,
                1 => Rank::Seven,
                2 => Rank::Eight,
                3 => Rank::Nine,
                4 => Rank::Ten,
                5 => Rank::Jack,
                6 => Rank::Queen,
                7 => Rank::King,
                8 => Rank::Ace,
                _ => Rank::Six,
            });
        }
    }
    None
}

/// Группа одинаковых рангов в руке: (ранг, сколько раз встречается).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankGroup {
    pub rank: Rank,
    pub count: u8,
}

/// Сигнатура количеств рангов в отсортированной руке.
///
/// Каноническая форма для классификации: группы упорядочены сначала
/// по количеству (по убыванию), затем по рангу (по убыванию). Одна эта
/// сигнатура заменяет восемь отдельных позиционных проверок — наивный
/// подсчёт соседних совпадений путает тройку и каре с "одной парой".
#[derive(Clone, Debug)]
pub struct RankSignature {
    groups: Vec<RankGroup>,
    mask: RankMask,
}

impl RankSignature {
    pub fn of(hand: &SortedHand) -> Self {
        let mut rank_counts = [0u8; 15]; // индексы 0..14, используем 2..14
        let mut mask: RankMask = 0;

        for card in hand.cards() {
            rank_counts[card.rank.value() as usize] += 1;
            mask |= rank_to_bit(card.rank);
        }

        let mut groups: Vec<RankGroup> = Vec::with_capacity(5);
        for rank in Rank::ALL {
            let count = rank_counts[rank.value() as usize];
            if count > 0 {
                groups.push(RankGroup { rank, count });
            }
        }

        // Сначала по количеству (desc), затем по рангу (desc).
        groups.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| b.rank.cmp(&a.rank)));

        Self { groups, mask }
    }

    /// Группы рангов: количество по убыванию, при равенстве — ранг по убыванию.
    pub fn groups(&self) -> &[RankGroup] {
        &self.groups
    }

    /// Сигнатура количеств: [4,1], [3,2], [3,1,1], [2,2,1], [2,1,1,1]
    /// или [1,1,1,1,1].
    pub fn pattern(&self) -> Vec<u8> {
        self.groups.iter().map(|g| g.count).collect()
    }

    /// Старшая карта стрита, если пять рангов идут строго подряд.
    pub fn straight_high(&self) -> Option<Rank> {
        detect_straight(self.mask)
    }
}

/// Все пять карт одной масти?
pub fn is_flush(hand: &SortedHand) -> bool {
    let suit = hand.cards()[0].suit;
    hand.cards().iter().all(|c| c.suit == suit)
}
