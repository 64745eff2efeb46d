//! Play generation and validity rules for Daifugo-style shedding card games,
//! with optional `no_std` support.
//!
//! The crate answers two questions for a turn-taking policy or a referee:
//! which plays a hand can make ([`generate_plays`]), and whether a given
//! turn may be taken next in the current round ([`is_valid_play`]). Every
//! query is a pure function of the hand or round passed in.
//!
//! # Example
//!
//! ```
//! use daifugo::{Round, Turn, generate_plays, is_valid_play, parse_cards};
//!
//! let hand = parse_cards(["3S", "4S", "5S", "5H"]).unwrap();
//! let round = Round::new();
//!
//! let plays = generate_plays(&hand);
//! assert!(plays.iter().all(|p| is_valid_play(&Turn::Play(p.clone()), &round)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod classify;
pub mod deal;
pub mod error;
pub mod generate;
pub mod options;
pub mod play;
pub mod policy;
pub mod round;
pub mod swap;
pub mod validate;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANK_ORDER, Rank, Suit, parse_cards};
pub use classify::{RankGroups, SuitGroups, group_by_rank, group_by_suit};
pub use deal::{HAND_SIZE, TABLE_SIZE, deal, new_deck, shuffled_deck};
pub use error::{ParseCardError, PlayError, RoundError, SwapError};
pub use generate::generate_plays;
pub use options::{RuleOptions, StraightLength};
pub use play::{MIN_STRAIGHT_LEN, Play, PlayKind, Turn};
pub use policy::choose_play;
pub use round::{Round, RoundEntry};
pub use swap::{swap_cards, swap_partner};
pub use validate::{is_valid_play, is_valid_play_with, is_valid_submission};
