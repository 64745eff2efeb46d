//! Grouping of cards by rank and by suit.
//!
//! Groups are fixed-size tables indexed by [`Rank::index`] and
//! [`Suit::index`]. They are always derived from a card slice and never
//! stored alongside it.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};

/// Suits present for each rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    slots: [Vec<Suit>; Rank::COUNT],
}

impl RankGroups {
    /// Suits held for `rank`, in order of first appearance.
    #[must_use]
    pub fn get(&self, rank: Rank) -> &[Suit] {
        &self.slots[rank.index()]
    }

    /// Iterates non-empty groups in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, &[Suit])> {
        Rank::ALL
            .iter()
            .zip(&self.slots)
            .filter(|(_, suits)| !suits.is_empty())
            .map(|(&rank, suits)| (rank, suits.as_slice()))
    }

    /// Number of distinct ranks present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|suits| !suits.is_empty()).count()
    }

    /// Returns whether no rank is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }
}

/// Ranks present for each suit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitGroups {
    slots: [Vec<Rank>; Suit::COUNT],
}

impl SuitGroups {
    /// Ranks held in `suit`, in order of first appearance.
    #[must_use]
    pub fn get(&self, suit: Suit) -> &[Rank] {
        &self.slots[suit.index()]
    }

    /// Presence table for `suit`, indexed by [`Rank::index`].
    #[must_use]
    pub fn presence(&self, suit: Suit) -> [bool; Rank::COUNT] {
        let mut present = [false; Rank::COUNT];
        for rank in self.get(suit) {
            present[rank.index()] = true;
        }
        present
    }

    /// Iterates non-empty groups in suit table order.
    pub fn iter(&self) -> impl Iterator<Item = (Suit, &[Rank])> {
        Suit::ALL
            .iter()
            .zip(&self.slots)
            .filter(|(_, ranks)| !ranks.is_empty())
            .map(|(&suit, ranks)| (suit, ranks.as_slice()))
    }

    /// Number of distinct suits present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|ranks| !ranks.is_empty()).count()
    }

    /// Returns whether no suit is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }
}

/// Partitions `cards` by rank.
///
/// A card repeated in the input is only counted once.
///
/// ```
/// use daifugo::{Rank, Suit, group_by_rank, parse_cards};
///
/// let cards = parse_cards(["7S", "7H", "9D"]).unwrap();
/// let groups = group_by_rank(&cards);
/// assert_eq!(groups.get(Rank::Seven), &[Suit::Spades, Suit::Hearts]);
/// assert_eq!(groups.len(), 2);
/// ```
#[must_use]
pub fn group_by_rank(cards: &[Card]) -> RankGroups {
    let mut slots: [Vec<Suit>; Rank::COUNT] = core::array::from_fn(|_| Vec::new());
    for card in cards {
        let slot = &mut slots[card.rank.index()];
        if !slot.contains(&card.suit) {
            slot.push(card.suit);
        }
    }
    RankGroups { slots }
}

/// Partitions `cards` by suit.
///
/// A card repeated in the input is only counted once.
#[must_use]
pub fn group_by_suit(cards: &[Card]) -> SuitGroups {
    let mut slots: [Vec<Rank>; Suit::COUNT] = core::array::from_fn(|_| Vec::new());
    for card in cards {
        let slot = &mut slots[card.suit.index()];
        if !slot.contains(&card.rank) {
            slot.push(card.rank);
        }
    }
    SuitGroups { slots }
}
