//! Enumeration of every non-pass play a hand can make.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::classify::{group_by_rank, group_by_suit};
use crate::play::{MIN_STRAIGHT_LEN, Play};

/// Lists every play `hand` can make, without duplicates.
///
/// Plays come out in a fixed order: singles in hand order, then
/// n-of-a-kind plays by ascending rank (pairs, triples, quad), then
/// straights by suit, each suit's runs ordered by lowest card and length.
/// A card repeated in `hand` is only used once.
///
/// ```
/// use daifugo::{PlayKind, generate_plays, parse_cards};
///
/// let hand = parse_cards(["3S", "4S", "5S", "3H"]).unwrap();
/// let plays = generate_plays(&hand);
/// assert_eq!(plays.iter().filter(|p| p.kind() == PlayKind::Single).count(), 4);
/// assert_eq!(plays.iter().filter(|p| p.kind() == PlayKind::Pair).count(), 1);
/// assert_eq!(plays.iter().filter(|p| p.is_straight()).count(), 1);
/// ```
#[must_use]
pub fn generate_plays(hand: &[Card]) -> Vec<Play> {
    let mut plays = Vec::new();
    push_singles(hand, &mut plays);
    push_of_a_kind(hand, &mut plays);
    push_straights(hand, &mut plays);
    tracing::trace!(cards = hand.len(), plays = plays.len(), "generated plays");
    plays
}

fn push_singles(hand: &[Card], plays: &mut Vec<Play>) {
    let mut seen = [false; DECK_SIZE];
    for &card in hand {
        if !core::mem::replace(&mut seen[card.index()], true) {
            plays.push(Play::single(card));
        }
    }
}

fn push_of_a_kind(hand: &[Card], plays: &mut Vec<Play>) {
    for (rank, suits) in group_by_rank(hand).iter() {
        for size in 2..=suits.len().min(Suit::COUNT) {
            for_each_combination(suits, size, |picked| {
                plays.push(Play::of_a_kind(rank, picked));
            });
        }
    }
}

/// Emits every length-3-or-more sub-run of each maximal run of ranks.
fn push_straights(hand: &[Card], plays: &mut Vec<Play>) {
    let ranks = Rank::ALL;
    let groups = group_by_suit(hand);
    for (suit, _) in groups.iter() {
        let present = groups.presence(suit);
        let mut start = 0;
        while start < Rank::COUNT {
            if !present[start] {
                start += 1;
                continue;
            }
            let mut end = start;
            while end < Rank::COUNT && present[end] {
                end += 1;
            }
            let run = &ranks[start..end];
            for from in 0..run.len() {
                for to in from + MIN_STRAIGHT_LEN..=run.len() {
                    plays.push(Play::straight(suit, &run[from..to]));
                }
            }
            start = end;
        }
    }
}

/// Calls `emit` with every `size`-element subset of `items`, in
/// lexicographic index order.
fn for_each_combination<T: Copy>(items: &[T], size: usize, mut emit: impl FnMut(&[T])) {
    let n = items.len();
    if size == 0 || size > n {
        return;
    }
    let mut indices: Vec<usize> = (0..size).collect();
    let mut picked: Vec<T> = Vec::with_capacity(size);
    loop {
        picked.clear();
        picked.extend(indices.iter().map(|&i| items[i]));
        emit(&picked);

        // Advance the rightmost index that still has room.
        let Some(pos) = (0..size).rev().find(|&i| indices[i] != i + n - size) else {
            return;
        };
        indices[pos] += 1;
        for i in pos + 1..size {
            indices[i] = indices[i - 1] + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combos(n: usize, k: usize) -> Vec<Vec<usize>> {
        let items: Vec<usize> = (0..n).collect();
        let mut out = Vec::new();
        for_each_combination(&items, k, |c| out.push(c.to_vec()));
        out
    }

    #[test]
    fn combinations_are_lexicographic() {
        assert_eq!(
            combos(4, 2),
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
        assert_eq!(combos(4, 4), vec![vec![0, 1, 2, 3]]);
        assert!(combos(2, 3).is_empty());
    }
}
