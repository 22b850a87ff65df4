//! Dealer play and settlement.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{DealerError, SettleError};
use crate::result::{HandOutcome, HandResult, RoundResult};
use crate::round2;

use super::{Round, RoundPhase};

impl Round<'_> {
    /// Plays out the dealer's hand and returns the cards drawn.
    ///
    /// The dealer draws until reaching 17 or more. The usual ace rule
    /// applies, so a soft 17 stands.
    ///
    /// # Errors
    ///
    /// Returns [`DealerError::OutOfTurn`] unless every player hand is
    /// resolved and at least one of them stood.
    pub fn dealer_turn(&mut self) -> Result<Vec<Card>, DealerError> {
        if self.phase != RoundPhase::DealerTurn {
            return Err(DealerError::OutOfTurn);
        }
        let mut drawn = Vec::new();
        while self.dealer.value() < 17 {
            let card = self.draw_card();
            self.dealer.add_card(card);
            drawn.push(card);
        }
        self.phase = RoundPhase::RoundOver;
        Ok(drawn)
    }

    /// Settles the round: decides each hand against the dealer, credits
    /// payouts to the account and reports the result.
    ///
    /// A winning hand is paid twice its stake, a natural blackjack two and
    /// a half times, and a push returns the stake alone. Lost stakes were
    /// already debited when wagered. Each winning hand is recorded in the
    /// account statistics.
    ///
    /// # Errors
    ///
    /// Returns [`SettleError::InProgress`] while there is still play left,
    /// or [`SettleError::AlreadySettled`] on a second call.
    pub fn settle(&mut self) -> Result<RoundResult, SettleError> {
        match self.phase {
            RoundPhase::PlayerTurn | RoundPhase::DealerTurn => {
                return Err(SettleError::InProgress);
            }
            RoundPhase::Complete => return Err(SettleError::AlreadySettled),
            RoundPhase::RoundOver => {}
        }

        let dealer_value = self.dealer.value();
        let dealer_bust = self.dealer.is_bust();
        let mut hands = Vec::with_capacity(self.hands.len());
        let mut total_payout = 0.0;
        let mut total_stake = 0.0;
        for (index, seat) in self.hands.iter().enumerate() {
            let value = seat.hand.value();
            let outcome = if seat.hand.is_bust() {
                HandOutcome::Loss
            } else if dealer_bust || value > dealer_value {
                if seat.hand.is_blackjack() {
                    HandOutcome::Blackjack
                } else {
                    HandOutcome::Win
                }
            } else if value == dealer_value {
                HandOutcome::Push
            } else {
                HandOutcome::Loss
            };
            let payout = round2(match outcome {
                HandOutcome::Blackjack => seat.stake * 2.5,
                HandOutcome::Win => seat.stake * 2.0,
                HandOutcome::Push => seat.stake,
                HandOutcome::Loss => 0.0,
            });
            match outcome {
                HandOutcome::Blackjack | HandOutcome::Win => self.account.credit_win(payout),
                HandOutcome::Push => self.account.credit_push(payout),
                HandOutcome::Loss => {}
            }
            total_payout += payout;
            total_stake += seat.stake;
            hands.push(HandResult {
                index,
                outcome,
                stake: seat.stake,
                payout,
                value,
            });
        }
        self.phase = RoundPhase::Complete;
        Ok(RoundResult {
            hands,
            dealer_value,
            total_payout: round2(total_payout),
            net: round2(total_payout - total_stake),
        })
    }
}
