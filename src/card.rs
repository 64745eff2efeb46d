//! Card types and their two-character token format.
//!
//! A card is written as a rank symbol followed by a suit symbol, e.g. `"3S"`,
//! `"0D"` (ten of diamonds) or `"2H"`. Ten uses the single symbol `0`, so
//! every token is exactly two characters long.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Rank symbols in canonical order, lowest first.
pub const RANK_ORDER: &str = "34567890JQKA2";

const SUIT_SYMBOLS: &[u8; 4] = b"SHDC";

/// Card rank.
///
/// Variants are declared in game order, so the derived [`Ord`] is the
/// canonical ranking: three is the lowest rank and two the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Three (lowest).
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
    /// Two (highest).
    Two,
}

impl Rank {
    /// Number of ranks.
    pub const COUNT: usize = 13;

    /// All ranks, lowest first.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
        Self::Two,
    ];

    /// Position of the rank in canonical order (`0` for three, `12` for two).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the rank at `index` in canonical order.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Returns the token symbol for this rank.
    #[must_use]
    pub const fn symbol(self) -> char {
        RANK_ORDER.as_bytes()[self.index()] as char
    }

    /// Parses a rank symbol.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        RANK_ORDER
            .chars()
            .position(|c| c == symbol)
            .and_then(Self::from_index)
    }
}

/// Card suit.
///
/// Suits carry no ranking. [`Suit::index`] exists only so suits can address
/// fixed-size tables and be iterated deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// Number of suits.
    pub const COUNT: usize = 4;

    /// All suits in table order.
    pub const ALL: [Self; Self::COUNT] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Table slot of this suit.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the token symbol for this suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        SUIT_SYMBOLS[self.index()] as char
    }

    /// Parses a suit symbol.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'S' => Some(Self::Spades),
            'H' => Some(Self::Hearts),
            'D' => Some(Self::Diamonds),
            'C' => Some(Self::Clubs),
            _ => None,
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Dense index in `0..DECK_SIZE`, unique per card.
    #[must_use]
    pub const fn index(self) -> usize {
        self.suit.index() * Rank::COUNT + self.rank.index()
    }

    /// The two ASCII bytes of this card's token.
    #[must_use]
    pub const fn token(self) -> [u8; 2] {
        [self.rank.symbol() as u8, self.suit.symbol() as u8]
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParseCardError::Length);
        };
        let rank = Rank::from_symbol(rank_ch).ok_or(ParseCardError::Rank(rank_ch))?;
        let suit = Suit::from_symbol(suit_ch).ok_or(ParseCardError::Suit(suit_ch))?;
        Ok(Self::new(rank, suit))
    }
}

/// Parses a list of card tokens (e.g. `["3S", "4S", "5S"]`).
///
/// # Errors
///
/// Returns the first token that fails to parse.
pub fn parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, ParseCardError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = Rank::COUNT * Suit::COUNT;

#[cfg(feature = "serde")]
impl serde::Serialize for Card {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let token = self.token();
        let token = core::str::from_utf8(&token).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(token)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Card {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TokenVisitor;

        impl serde::de::Visitor<'_> for TokenVisitor {
            type Value = Card;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a two-character card token")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Card, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(TokenVisitor)
    }
}
