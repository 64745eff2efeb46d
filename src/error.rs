//! Error types for parsing, play construction, rounds and card swaps.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while parsing a card token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Token is not exactly two characters long.
    #[error("card token must be exactly two characters")]
    Length,
    /// Unknown rank symbol.
    #[error("unknown rank symbol `{0}`")]
    Rank(char),
    /// Unknown suit symbol.
    #[error("unknown suit symbol `{0}`")]
    Suit(char),
}

/// Errors that can occur while classifying cards into a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// No cards were given.
    #[error("a play needs at least one card")]
    Empty,
    /// The same card appears twice.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    /// The cards form neither an n-of-a-kind nor a straight.
    #[error("{len} cards form neither an n-of-a-kind nor a straight")]
    Unrecognised {
        /// Number of cards submitted.
        len: usize,
    },
}

/// Errors that can occur while recording a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A round cannot open with a pass.
    #[error("a round cannot open with a pass")]
    PassBeforeLead,
}

/// Errors that can occur while choosing cards to swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SwapError {
    /// Seat is outside the table.
    #[error("seat {0} is not at the table")]
    InvalidSeat(u8),
    /// The hand holds fewer cards than the seat must give.
    #[error("not enough cards in hand to swap")]
    NotEnoughCards,
}
