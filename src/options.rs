//! Table configuration.

/// Configuration for a blackjack table.
///
/// Options are set with a builder-style API:
///
/// ```
/// use twentyone::TableOptions;
///
/// let options = TableOptions::new().with_decks(8).with_min_bet(5.0);
/// assert_eq!(options.decks(), 8);
/// assert_eq!(options.min_bet(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableOptions {
    /// Number of 52-card decks in the shoe.
    decks: usize,
    /// Minimum wager accepted at the table, in dollars.
    min_bet: f64,
    /// Riffle passes performed when the shoe is shuffled.
    shuffle_passes: u32,
}

impl TableOptions {
    /// Creates table options with the default values: a six-deck shoe, a
    /// two-dollar minimum bet and fifteen riffle passes per shuffle.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            decks: 6,
            min_bet: 2.0,
            shuffle_passes: 15,
        }
    }

    /// Sets the number of decks in the shoe.
    ///
    /// A shoe holds at least one deck; zero is treated as one.
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::new().with_decks(2);
    /// assert_eq!(options.decks(), 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: usize) -> Self {
        self.decks = if decks == 0 { 1 } else { decks };
        self
    }

    /// Sets the minimum wager accepted when a round begins.
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::new().with_min_bet(10.0);
    /// assert_eq!(options.min_bet(), 10.0);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: f64) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the number of riffle passes performed per shuffle.
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::new().with_shuffle_passes(7);
    /// assert_eq!(options.shuffle_passes(), 7);
    /// ```
    #[must_use]
    pub const fn with_shuffle_passes(mut self, shuffle_passes: u32) -> Self {
        self.shuffle_passes = shuffle_passes;
        self
    }

    /// Returns the number of decks in the shoe.
    #[must_use]
    pub const fn decks(&self) -> usize {
        self.decks
    }

    /// Returns the minimum wager accepted when a round begins.
    #[must_use]
    pub const fn min_bet(&self) -> f64 {
        self.min_bet
    }

    /// Returns the number of riffle passes performed per shuffle.
    #[must_use]
    pub const fn shuffle_passes(&self) -> u32 {
        self.shuffle_passes
    }
}

impl Default for TableOptions {
    fn default() -> Self {
        Self::new()
    }
}
