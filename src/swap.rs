//! Pre-game card swap between seats.
//!
//! Before the first round, seats trade cards:
//!
//! - seat 0 gives its two highest cards to seat 3;
//! - seat 1 gives its highest card to seat 2;
//! - seat 2 gives one card of its choice to seat 1;
//! - seat 3 gives two cards of its choice to seat 0.
//!
//! Where a seat has a choice, it gives away its lowest cards.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::deal::TABLE_SIZE;
use crate::error::SwapError;

/// Seat that receives the cards given by `seat`.
///
/// # Errors
///
/// Returns [`SwapError::InvalidSeat`] if `seat` is not at the table.
pub const fn swap_partner(seat: u8) -> Result<u8, SwapError> {
    if seat as usize >= TABLE_SIZE {
        return Err(SwapError::InvalidSeat(seat));
    }
    Ok(TABLE_SIZE as u8 - 1 - seat)
}

/// Chooses the cards `seat` must hand over. The hand is left untouched.
///
/// Cards of equal rank are taken in hand order.
///
/// # Errors
///
/// Returns an error if `seat` is not at the table or `hand` holds fewer
/// cards than the seat must give.
///
/// # Example
///
/// ```
/// use daifugo::{parse_cards, swap_cards};
///
/// let hand = parse_cards(["3S", "2H", "KD", "AC"]).unwrap();
/// let given = swap_cards(&hand, 0).unwrap();
/// assert_eq!(given, parse_cards(["2H", "AC"]).unwrap());
/// ```
pub fn swap_cards(hand: &[Card], seat: u8) -> Result<Vec<Card>, SwapError> {
    let (count, highest) = match seat {
        0 => (2, true),
        1 => (1, true),
        2 => (1, false),
        3 => (2, false),
        _ => return Err(SwapError::InvalidSeat(seat)),
    };
    if hand.len() < count {
        return Err(SwapError::NotEnoughCards);
    }

    let mut sorted = hand.to_vec();
    if highest {
        sorted.sort_by(|a, b| b.rank.cmp(&a.rank));
    } else {
        sorted.sort_by_key(|c| c.rank);
    }
    sorted.truncate(count);

    tracing::debug!(seat, count, "chose swap cards");
    Ok(sorted)
}
