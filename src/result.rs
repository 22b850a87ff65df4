//! Round settlement results.

use alloc::vec::Vec;

/// Outcome of a single player hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandOutcome {
    /// A natural blackjack, paid at three to two.
    Blackjack,
    /// Beat the dealer, paid even money.
    Win,
    /// Tied the dealer; the stake comes back.
    Push,
    /// Lost to the dealer, or busted; the stake is gone.
    Loss,
}

impl HandOutcome {
    /// Returns whether this outcome counts as a won hand.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win | Self::Blackjack)
    }
}

/// Settlement detail for one player hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandResult {
    /// Position of the hand at the table, in play order.
    pub index: usize,
    /// How the hand fared against the dealer.
    pub outcome: HandOutcome,
    /// The stake riding on the hand when the round ended.
    pub stake: f64,
    /// Amount credited back to the account, including any returned stake.
    pub payout: f64,
    /// Final value of the hand.
    pub value: u8,
}

/// Settlement of a completed round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    /// Per-hand settlement, in play order.
    pub hands: Vec<HandResult>,
    /// Final value of the dealer's hand.
    pub dealer_value: u8,
    /// Total amount credited back to the account.
    pub total_payout: f64,
    /// Payouts minus stakes for this round.
    pub net: f64,
}

impl RoundResult {
    /// Returns whether the dealer busted.
    #[must_use]
    pub const fn dealer_busted(&self) -> bool {
        self.dealer_value > 21
    }
}
