//! Plays, their classification, and turns.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::PlayError;

/// Shortest run of cards that counts as a straight.
pub const MIN_STRAIGHT_LEN: usize = 3;

/// Shape of a play, decided once when the play is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayKind {
    /// One card.
    Single,
    /// Two cards of one rank.
    Pair,
    /// Three cards of one rank.
    Triple,
    /// Four cards of one rank.
    Quad,
    /// Three or more cards of one suit on consecutive ranks.
    Straight(u8),
}

impl PlayKind {
    /// Number of cards sharing the play's rank, or `0` for a straight.
    #[must_use]
    pub const fn arity(self) -> u8 {
        match self {
            Self::Single => 1,
            Self::Pair => 2,
            Self::Triple => 3,
            Self::Quad => 4,
            Self::Straight(_) => 0,
        }
    }

    const fn of_a_kind(len: usize) -> Option<Self> {
        match len {
            1 => Some(Self::Single),
            2 => Some(Self::Pair),
            3 => Some(Self::Triple),
            4 => Some(Self::Quad),
            _ => None,
        }
    }
}

/// A legal combination of cards.
///
/// Straights are kept in ascending rank order; n-of-a-kind plays keep the
/// order they were given in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Card>", into = "Vec<Card>")
)]
pub struct Play {
    cards: Vec<Card>,
    kind: PlayKind,
}

impl Play {
    /// Classifies `cards` as a single, n-of-a-kind or straight.
    ///
    /// # Errors
    ///
    /// Returns an error if `cards` is empty, repeats a card, or matches
    /// neither shape.
    ///
    /// # Example
    ///
    /// ```
    /// use daifugo::{Play, PlayKind, parse_cards};
    ///
    /// let run = Play::new(parse_cards(["5H", "3H", "4H"]).unwrap()).unwrap();
    /// assert_eq!(run.kind(), PlayKind::Straight(3));
    /// assert_eq!(run.highest().to_string(), "5H");
    /// ```
    pub fn new(mut cards: Vec<Card>) -> Result<Self, PlayError> {
        if cards.is_empty() {
            return Err(PlayError::Empty);
        }

        let mut seen = [false; DECK_SIZE];
        for card in &cards {
            if core::mem::replace(&mut seen[card.index()], true) {
                return Err(PlayError::DuplicateCard(*card));
            }
        }

        let len = cards.len();
        let first = cards[0];
        if cards.iter().all(|c| c.rank == first.rank) {
            let kind = PlayKind::of_a_kind(len).ok_or(PlayError::Unrecognised { len })?;
            return Ok(Self { cards, kind });
        }

        if len >= MIN_STRAIGHT_LEN && cards.iter().all(|c| c.suit == first.suit) {
            cards.sort_by_key(|c| c.rank);
            if is_contiguous(cards.iter().map(|c| c.rank)) {
                return Ok(Self {
                    cards,
                    kind: PlayKind::Straight(len as u8),
                });
            }
        }

        Err(PlayError::Unrecognised { len })
    }

    /// Builds a single-card play.
    #[must_use]
    pub fn single(card: Card) -> Self {
        Self {
            cards: alloc::vec![card],
            kind: PlayKind::Single,
        }
    }

    /// Builds an n-of-a-kind play from suits of one rank.
    ///
    /// The caller guarantees `suits` holds one to four distinct suits.
    pub(crate) fn of_a_kind(rank: Rank, suits: &[Suit]) -> Self {
        let kind = PlayKind::of_a_kind(suits.len()).unwrap_or(PlayKind::Single);
        Self {
            cards: suits.iter().map(|&suit| Card::new(rank, suit)).collect(),
            kind,
        }
    }

    /// Builds a straight from ascending contiguous ranks of one suit.
    ///
    /// The caller guarantees at least three contiguous ranks.
    pub(crate) fn straight(suit: Suit, ranks: &[Rank]) -> Self {
        Self {
            cards: ranks.iter().map(|&rank| Card::new(rank, suit)).collect(),
            kind: PlayKind::Straight(ranks.len() as u8),
        }
    }

    /// Cards in this play.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shape of this play.
    #[must_use]
    pub const fn kind(&self) -> PlayKind {
        self.kind
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always `false`; a play holds at least one card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards sharing the play's rank: `1` to `4`, or `0` for a
    /// straight.
    #[must_use]
    pub const fn arity(&self) -> u8 {
        self.kind.arity()
    }

    /// Returns whether this play is a straight.
    #[must_use]
    pub const fn is_straight(&self) -> bool {
        matches!(self.kind, PlayKind::Straight(_))
    }

    /// Common rank of a single or n-of-a-kind play.
    #[must_use]
    pub fn rank(&self) -> Option<Rank> {
        if self.is_straight() {
            None
        } else {
            Some(self.cards[0].rank)
        }
    }

    /// Highest-ranked card.
    ///
    /// For a straight this is its top card; for a single it is the card
    /// itself. Among equal ranks the first card wins.
    #[must_use]
    pub fn highest(&self) -> Card {
        if self.is_straight() {
            return self.cards[self.cards.len() - 1];
        }
        self.cards
            .iter()
            .copied()
            .reduce(|best, c| if c.rank > best.rank { c } else { best })
            .unwrap_or(self.cards[0])
    }
}

impl TryFrom<Vec<Card>> for Play {
    type Error = PlayError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::new(cards)
    }
}

impl From<Play> for Vec<Card> {
    fn from(play: Play) -> Self {
        play.cards
    }
}

/// Returns whether `ranks`, already ascending, have no gaps.
pub(crate) fn is_contiguous(ranks: impl IntoIterator<Item = Rank>) -> bool {
    let mut ranks = ranks.into_iter();
    let Some(mut prev) = ranks.next() else {
        return true;
    };
    for rank in ranks {
        if rank.index() != prev.index() + 1 {
            return false;
        }
        prev = rank;
    }
    true
}

/// A player's move: a play or a pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Option<Play>", into = "Option<Play>")
)]
pub enum Turn {
    /// Cards put down.
    Play(Play),
    /// No cards put down.
    Pass,
}

impl Turn {
    /// Arity of the played cards, `0` for a pass.
    #[must_use]
    pub const fn arity(&self) -> u8 {
        match self {
            Self::Play(play) => play.arity(),
            Self::Pass => 0,
        }
    }

    /// The play, if this turn is not a pass.
    #[must_use]
    pub const fn play(&self) -> Option<&Play> {
        match self {
            Self::Play(play) => Some(play),
            Self::Pass => None,
        }
    }

    /// Returns whether this turn is a pass.
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl From<Play> for Turn {
    fn from(play: Play) -> Self {
        Self::Play(play)
    }
}

impl From<Option<Play>> for Turn {
    fn from(play: Option<Play>) -> Self {
        play.map_or(Self::Pass, Self::Play)
    }
}

impl From<Turn> for Option<Play> {
    fn from(turn: Turn) -> Self {
        match turn {
            Turn::Play(play) => Some(play),
            Turn::Pass => None,
        }
    }
}
