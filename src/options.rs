//! Rule configuration for play validation.

/// How a straight may answer a straight lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum StraightLength {
    /// Any straight answers any straight.
    #[default]
    Any,
    /// The answer must have as many cards as the lead.
    Match,
}

/// Configuration options for play validation.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use daifugo::{RuleOptions, StraightLength};
///
/// let options = RuleOptions::default()
///     .with_straight_length(StraightLength::Match)
///     .with_suit_lock(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleOptions {
    /// Length rule for straights answering a straight lead.
    pub straight_length: StraightLength,
    /// Whether an on-suit round forces singles and straights to follow the
    /// last play's suit.
    pub suit_lock: bool,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            straight_length: StraightLength::Any,
            suit_lock: true,
        }
    }
}

impl RuleOptions {
    /// Sets the straight length rule.
    ///
    /// # Example
    ///
    /// ```
    /// use daifugo::{RuleOptions, StraightLength};
    ///
    /// let options = RuleOptions::default().with_straight_length(StraightLength::Match);
    /// assert_eq!(options.straight_length, StraightLength::Match);
    /// ```
    #[must_use]
    pub const fn with_straight_length(mut self, rule: StraightLength) -> Self {
        self.straight_length = rule;
        self
    }

    /// Sets whether on-suit rounds enforce suit following.
    ///
    /// # Example
    ///
    /// ```
    /// use daifugo::RuleOptions;
    ///
    /// let options = RuleOptions::default().with_suit_lock(false);
    /// assert_eq!(options.suit_lock, false);
    /// ```
    #[must_use]
    pub const fn with_suit_lock(mut self, enabled: bool) -> Self {
        self.suit_lock = enabled;
        self
    }
}
