//! Table configuration options.

use crate::error::ConfigError;

/// Rounding mode for payouts that are not a whole unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    #[default]
    Down,
    /// Round to nearest.
    Nearest,
}

impl RoundingMode {
    /// Rounds `amount` to a whole unit.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn apply(self, amount: f64) -> usize {
        match self {
            Self::Up => amount.ceil() as usize,
            Self::Down => amount.floor() as usize,
            Self::Nearest => amount.round() as usize,
        }
    }

    /// Rounds `amount` to a whole unit.
    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    #[must_use]
    pub fn apply(self, amount: f64) -> usize {
        match self {
            Self::Up => libm::ceil(amount) as usize,
            Self::Down => libm::floor(amount) as usize,
            Self::Nearest => libm::round(amount) as usize,
        }
    }
}

/// Configuration options for a blackjack table.
///
/// The rules themselves are fixed: the dealer peeks for blackjack, draws to
/// 16 and stands on all 17s, and blackjack pays 3 to 2. Use the builder
/// pattern to size the table:
///
/// ```
/// use bjcore::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(6)
///     .with_hands(2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Number of hands the player plays each round.
    pub hands: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            hands: 1,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of hands played each round.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::TableOptions;
    ///
    /// let options = TableOptions::default().with_hands(3);
    /// assert_eq!(options.hands, 3);
    /// ```
    #[must_use]
    pub const fn with_hands(mut self, hands: usize) -> Self {
        self.hands = hands;
        self
    }

    /// Checks that the table has at least one deck and one hand.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDecks`] or [`ConfigError::ZeroHands`].
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.decks == 0 {
            return Err(ConfigError::ZeroDecks);
        }
        if self.hands == 0 {
            return Err(ConfigError::ZeroHands);
        }
        Ok(())
    }
}
