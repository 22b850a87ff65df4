//! The round engine.

mod actions;
mod deal;
mod dealer;
mod state;

pub use state::{HandStatus, PlayerAction, RoundPhase};

use alloc::vec::Vec;

use crate::account::Account;
use crate::card::Card;
use crate::hand::Hand;
use crate::shoe::Shoe;

/// One player hand at the table, with the stake riding on it.
#[derive(Debug, Clone)]
pub struct PlayerHand {
    hand: Hand,
    stake: f64,
    status: HandStatus,
}

impl PlayerHand {
    /// Returns the cards of the hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the stake riding on the hand.
    #[must_use]
    pub const fn stake(&self) -> f64 {
        self.stake
    }

    /// Returns the status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }
}

/// One playable round of blackjack.
///
/// A round borrows the shoe and the player's account for its whole
/// lifetime, so all money movement goes through the account it was opened
/// with. It is driven phase by phase: player decisions while
/// [`RoundPhase::PlayerTurn`], one call to [`dealer_turn`](Self::dealer_turn)
/// if the dealer has to play, then one call to [`settle`](Self::settle).
///
/// ```
/// use twentyone::{Account, Round, RoundPhase, Shoe, TableOptions};
///
/// let options = TableOptions::new();
/// let mut shoe = Shoe::new(options, 7);
/// let mut account = Account::new();
/// account.deposit(100.0);
///
/// let mut round = Round::begin(&mut shoe, &mut account, options, 10.0)?;
/// while round.phase() == RoundPhase::PlayerTurn {
///     round.stand()?;
/// }
/// if round.phase() == RoundPhase::DealerTurn {
///     round.dealer_turn()?;
/// }
/// let result = round.settle()?;
/// assert_eq!(result.hands.len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Round<'a> {
    shoe: &'a mut Shoe,
    account: &'a mut Account,
    hands: Vec<PlayerHand>,
    dealer: Hand,
    cursor: usize,
    phase: RoundPhase,
    reshuffles: u32,
}

impl Round<'_> {
    /// Returns the current phase of the round.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the player hands at the table, in play order.
    #[must_use]
    pub fn hands(&self) -> &[PlayerHand] {
        &self.hands
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the index of the hand awaiting a decision, if any.
    #[must_use]
    pub const fn active_hand(&self) -> Option<usize> {
        if matches!(self.phase, RoundPhase::PlayerTurn) {
            Some(self.cursor)
        } else {
            None
        }
    }

    /// Returns how many times the shoe reshuffled during this round.
    #[must_use]
    pub const fn reshuffles(&self) -> u32 {
        self.reshuffles
    }

    /// Draws a card, noting any reshuffle the shoe performed.
    fn draw_card(&mut self) -> Card {
        let draw = self.shoe.draw();
        if draw.reshuffled {
            self.reshuffles += 1;
        }
        draw.card
    }

    /// Moves the cursor to the next hand still awaiting a decision, or ends
    /// the player's turn when none remains. The dealer plays only if at
    /// least one hand stood; an all-bust table goes straight to settlement.
    fn advance(&mut self) {
        while let Some(seat) = self.hands.get(self.cursor) {
            if seat.status == HandStatus::Active {
                return;
            }
            self.cursor += 1;
        }
        self.phase = if self.hands.iter().any(|seat| seat.status == HandStatus::Stood) {
            RoundPhase::DealerTurn
        } else {
            RoundPhase::RoundOver
        };
    }
}
