//! Legality of a turn against the current round.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::options::{RuleOptions, StraightLength};
use crate::play::{Play, PlayKind, Turn};
use crate::round::Round;

/// Returns whether `turn` may be taken next in `round` under the default
/// rules.
///
/// ```
/// use daifugo::{Play, Round, Turn, is_valid_play, parse_cards};
///
/// let single = |token: &str| Play::new(parse_cards([token]).unwrap()).unwrap();
///
/// let mut round = Round::with_lead(single("5S"));
/// round.push(Turn::Play(single("6S"))).unwrap();
///
/// assert!(!is_valid_play(&Turn::Play(single("7H")), &round));
/// assert!(is_valid_play(&Turn::Play(single("7S")), &round));
/// assert!(is_valid_play(&Turn::Pass, &round));
/// assert!(!is_valid_play(&Turn::Pass, &Round::new()));
/// ```
#[must_use]
pub fn is_valid_play(turn: &Turn, round: &Round) -> bool {
    is_valid_play_with(turn, round, &RuleOptions::default())
}

/// Returns whether `turn` may be taken next in `round` under `options`.
#[must_use]
pub fn is_valid_play_with(turn: &Turn, round: &Round, options: &RuleOptions) -> bool {
    let Turn::Play(play) = turn else {
        return !round.is_empty();
    };
    let (Some(lead), Some(last)) = (round.lead(), round.last_live_play()) else {
        return true;
    };

    if !matches_lead_shape(play, lead, options) {
        tracing::trace!(kind = ?play.kind(), lead = ?lead.kind(), "rejected: shape");
        return false;
    }

    if lead.arity() > 1 {
        let beats = play.rank() > last.rank();
        if !beats {
            tracing::trace!("rejected: rank");
        }
        return beats;
    }

    if !matches!(play.kind(), PlayKind::Single | PlayKind::Straight(_)) {
        tracing::trace!(kind = ?play.kind(), "rejected: not a single or straight");
        return false;
    }

    let top = play.highest();
    let last_top = last.highest();
    if top.rank <= last_top.rank {
        tracing::trace!(%top, %last_top, "rejected: rank");
        return false;
    }

    if options.suit_lock && round.is_on_suit() && top.suit != last_top.suit {
        tracing::trace!(%top, %last_top, "rejected: round is on-suit");
        return false;
    }

    true
}

fn matches_lead_shape(play: &Play, lead: &Play, options: &RuleOptions) -> bool {
    if lead.arity() > 1 {
        play.arity() == lead.arity()
    } else if lead.is_straight() {
        play.is_straight()
            && (options.straight_length == StraightLength::Any || play.len() == lead.len())
    } else {
        play.len() == 1
    }
}

/// Checks raw cards submitted by an untrusted player.
///
/// Cards that do not form a play at all are simply invalid. Use
/// [`Play::new`] directly to learn why they were refused. An empty
/// submission is not a pass.
#[must_use]
pub fn is_valid_submission(cards: &[Card], round: &Round) -> bool {
    let cards: Vec<Card> = cards.to_vec();
    Play::new(cards).is_ok_and(|play| is_valid_play(&Turn::Play(play), round))
}
