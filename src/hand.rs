//! Hand representation and valuation.

use alloc::vec::Vec;

use crate::card::Card;

/// A blackjack hand.
///
/// The hand keeps its value current as cards arrive: every ace enters at 11,
/// and while the total exceeds 21 an ace still counted as 11 is demoted to 1.
/// The reported value is therefore always the best total reachable for the
/// cards held, or the minimal-ace total once the hand has busted.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in the hand, in deal order.
    cards: Vec<Card>,
    /// Current best value.
    value: u8,
    /// Aces currently counted as 11 (demotable).
    aces: u8,
    /// Whether this hand was created by splitting a pair.
    from_split: bool,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            value: 0,
            aces: 0,
            from_split: false,
        }
    }

    /// Creates a one-card hand produced by splitting a pair.
    ///
    /// Split hands are never eligible for a natural blackjack, even when the
    /// next card dealt makes ace + ten.
    #[must_use]
    pub fn from_split(card: Card) -> Self {
        let mut hand = Self {
            cards: Vec::new(),
            value: 0,
            aces: 0,
            from_split: true,
        };
        hand.add_card(card);
        hand
    }

    /// Adds a card to the hand and updates the running value.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.value = self.value.saturating_add(card.point_value());
        if card.is_ace() {
            self.aces += 1;
        }
        while self.value > 21 && self.aces > 0 {
            self.value -= 10;
            self.aces -= 1;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current value of the hand.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns whether the hand is soft (an ace is still counted as 11).
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.aces > 0
    }

    /// Returns whether the hand is bust (value over 21).
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.value > 21
    }

    /// Returns whether the hand is a natural blackjack.
    ///
    /// A natural is exactly two cards, one ace and one ten-valued card, on a
    /// hand that did not come from a split.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        if self.cards.len() != 2 || self.from_split {
            return false;
        }
        self.cards.iter().any(|c| c.is_ace()) && self.cards.iter().any(|c| c.is_ten_valued())
    }

    /// Returns whether the hand is a splittable pair.
    ///
    /// Splitting goes by point value, so any two ten-valued cards (10, J, Q,
    /// K in any combination) form a splittable pair.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].point_value() == self.cards[1].point_value()
    }

    /// Returns whether this hand came from a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}
