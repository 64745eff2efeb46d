//! Deck construction and seeded dealing.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Number of seats at the table.
pub const TABLE_SIZE: usize = 4;

/// Cards dealt to each seat.
pub const HAND_SIZE: usize = DECK_SIZE / TABLE_SIZE;

/// Builds an unshuffled deck, suit by suit in rank order.
#[must_use]
pub fn new_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

/// Builds a deck shuffled from `seed`.
///
/// The same seed always yields the same order.
#[must_use]
pub fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cards = new_deck();
    cards.shuffle(&mut rng);
    cards
}

/// Shuffles a deck from `seed` and deals it round-robin, seat 0 first.
///
/// ```
/// use daifugo::{HAND_SIZE, deal};
///
/// let hands = deal(7);
/// assert!(hands.iter().all(|hand| hand.len() == HAND_SIZE));
/// assert_eq!(hands, deal(7));
/// ```
#[must_use]
pub fn deal(seed: u64) -> [Vec<Card>; TABLE_SIZE] {
    let mut hands: [Vec<Card>; TABLE_SIZE] =
        core::array::from_fn(|_| Vec::with_capacity(HAND_SIZE));
    for (i, card) in shuffled_deck(seed).into_iter().enumerate() {
        hands[i % TABLE_SIZE].push(card);
    }
    tracing::debug!(seed, "dealt table");
    hands
}
