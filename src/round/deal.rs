//! Opening a round: stake collection and the initial deal.

use alloc::vec::Vec;

use crate::account::Account;
use crate::error::BetError;
use crate::hand::Hand;
use crate::options::TableOptions;
use crate::shoe::Shoe;

use super::{HandStatus, PlayerHand, Round, RoundPhase};

impl<'a> Round<'a> {
    /// Opens a round: debits the stake from the account and deals the
    /// opening cards.
    ///
    /// Cards go player, dealer, player; the dealer holds a single card
    /// until every player hand is resolved. A natural blackjack ends the
    /// player's turn on the spot and the round moves straight to the
    /// dealer's.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::BelowMinimum`] when the stake is under the
    /// table minimum, or [`BetError::InsufficientFunds`] when the account
    /// cannot cover the stake.
    pub fn begin(
        shoe: &'a mut Shoe,
        account: &'a mut Account,
        options: TableOptions,
        stake: f64,
    ) -> Result<Self, BetError> {
        if stake < options.min_bet() {
            return Err(BetError::BelowMinimum);
        }
        account.place_wager(stake)?;
        account.record_round();

        let mut round = Self {
            shoe,
            account,
            hands: Vec::with_capacity(2),
            dealer: Hand::new(),
            cursor: 0,
            phase: RoundPhase::PlayerTurn,
            reshuffles: 0,
        };

        let mut hand = Hand::new();
        let first = round.draw_card();
        hand.add_card(first);
        let up_card = round.draw_card();
        round.dealer.add_card(up_card);
        let second = round.draw_card();
        hand.add_card(second);

        let status = if hand.is_blackjack() {
            HandStatus::Stood
        } else {
            HandStatus::Active
        };
        round.hands.push(PlayerHand { hand, stake, status });
        round.advance();
        Ok(round)
    }
}
