//! Rounds: the lead and every turn taken after it.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::RoundError;
use crate::play::{Play, Turn};

/// One recorded turn of a round.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoundEntry {
    /// The opening play, which fixes the round's shape.
    Lead(Play),
    /// A play made after the lead.
    Follow(Play),
    /// A pass made after the lead.
    Passed,
}

impl RoundEntry {
    /// The play, if this entry is not a pass.
    #[must_use]
    pub const fn play(&self) -> Option<&Play> {
        match self {
            Self::Lead(play) | Self::Follow(play) => Some(play),
            Self::Passed => None,
        }
    }
}

/// The turns of the current round, in table order.
///
/// A round is either empty or starts with a [`RoundEntry::Lead`]; passes can
/// only be recorded once a lead exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Round {
    entries: Vec<RoundEntry>,
}

impl Round {
    /// Creates an empty round.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates a round opened by `lead`.
    #[must_use]
    pub fn with_lead(lead: Play) -> Self {
        Self {
            entries: alloc::vec![RoundEntry::Lead(lead)],
        }
    }

    /// Builds a round from turns in table order.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::PassBeforeLead`] if the first turn is a pass.
    ///
    /// # Example
    ///
    /// ```
    /// use daifugo::{Play, Round, Turn, parse_cards};
    ///
    /// let five = Play::new(parse_cards(["5S"]).unwrap()).unwrap();
    /// let round = Round::from_turns([Turn::Play(five), Turn::Pass]).unwrap();
    /// assert_eq!(round.len(), 2);
    /// assert!(Round::from_turns([Turn::Pass]).is_err());
    /// ```
    pub fn from_turns<I>(turns: I) -> Result<Self, RoundError>
    where
        I: IntoIterator<Item = Turn>,
    {
        let mut round = Self::new();
        for turn in turns {
            round.push(turn)?;
        }
        Ok(round)
    }

    /// Records the next turn.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::PassBeforeLead`] if the round is empty and
    /// `turn` is a pass.
    pub fn push(&mut self, turn: Turn) -> Result<(), RoundError> {
        let entry = match (turn, self.entries.is_empty()) {
            (Turn::Pass, true) => return Err(RoundError::PassBeforeLead),
            (Turn::Pass, false) => RoundEntry::Passed,
            (Turn::Play(play), true) => RoundEntry::Lead(play),
            (Turn::Play(play), false) => RoundEntry::Follow(play),
        };
        self.entries.push(entry);
        Ok(())
    }

    /// Recorded entries, lead first.
    #[must_use]
    pub fn entries(&self) -> &[RoundEntry] {
        &self.entries
    }

    /// Number of recorded turns, passes included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether nothing has been played yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The opening play.
    #[must_use]
    pub fn lead(&self) -> Option<&Play> {
        self.entries.first().and_then(RoundEntry::play)
    }

    /// The most recent play that was not a pass.
    ///
    /// Only `None` for an empty round, since the lead is always live.
    #[must_use]
    pub fn last_live_play(&self) -> Option<&Play> {
        self.entries.iter().rev().find_map(RoundEntry::play)
    }

    /// Returns whether later singles and straights must follow suit.
    ///
    /// A round is on-suit when the first play after the lead matches the
    /// lead's suit, comparing the top card of each. Rounds led by an
    /// n-of-a-kind are never on-suit. Once the first response is in, later
    /// turns cannot change the answer.
    #[must_use]
    pub fn is_on_suit(&self) -> bool {
        let Some(lead) = self.lead() else {
            return false;
        };
        if lead.arity() > 1 {
            return false;
        }
        self.entries
            .iter()
            .skip(1)
            .find_map(RoundEntry::play)
            .is_some_and(|response| determining_card(response).suit == determining_card(lead).suit)
    }
}

/// Card whose suit decides whether a round is on-suit.
fn determining_card(play: &Play) -> Card {
    play.highest()
}
