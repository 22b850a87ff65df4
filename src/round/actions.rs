//! Player decisions on the active hand.

use alloc::vec;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::Hand;

use super::{HandStatus, PlayerAction, PlayerHand, Round, RoundPhase};

impl Round<'_> {
    /// Returns the decisions currently open to the player.
    ///
    /// Empty outside the player's turn. Doubling requires an untouched
    /// two-card hand; splitting additionally requires equal point values
    /// and a hand that is not itself the product of a split. Both need
    /// the account to cover a second stake, so a short balance narrows
    /// the set to hit and stand.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<PlayerAction> {
        if self.phase != RoundPhase::PlayerTurn {
            return Vec::new();
        }
        let seat = &self.hands[self.cursor];
        let mut actions = vec![PlayerAction::Hit, PlayerAction::Stand];
        if self.account.balance() < seat.stake {
            return actions;
        }
        if seat.hand.len() == 2 {
            actions.push(PlayerAction::Double);
        }
        if !seat.hand.is_from_split() && seat.hand.can_split() {
            actions.push(PlayerAction::Split);
        }
        actions
    }

    /// Applies a player decision to the active hand.
    ///
    /// # Errors
    ///
    /// Forwards the error of the underlying operation; see [`hit`](Self::hit),
    /// [`stand`](Self::stand), [`double_down`](Self::double_down) and
    /// [`split`](Self::split).
    pub fn apply(&mut self, action: PlayerAction) -> Result<(), ActionError> {
        match action {
            PlayerAction::Hit => self.hit().map(|_| ()),
            PlayerAction::Stand => self.stand(),
            PlayerAction::Double => self.double_down().map(|_| ()),
            PlayerAction::Split => self.split().map(|_| ()),
        }
    }

    /// Draws one card onto the active hand and returns it.
    ///
    /// Going over 21 busts the hand and play moves on to the next hand, or
    /// to the dealer. Any other total, 21 included, leaves the hand
    /// awaiting its next decision.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::OutOfTurn`] outside the player's turn.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;
        let card = self.draw_card();
        let seat = &mut self.hands[self.cursor];
        seat.hand.add_card(card);
        if seat.hand.is_bust() {
            seat.status = HandStatus::Busted;
            self.advance();
        }
        Ok(card)
    }

    /// Ends the active hand at its current value.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::OutOfTurn`] outside the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        self.hands[self.cursor].status = HandStatus::Stood;
        self.advance();
        Ok(())
    }

    /// Doubles the stake on the active hand, draws exactly one card and
    /// stands. Returns the card drawn.
    ///
    /// The extra stake matches the one already riding and is debited
    /// through the account like any other wager.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::OutOfTurn`] outside the player's turn,
    /// [`ActionError::CannotDouble`] when the hand has other than two
    /// cards, or [`ActionError::InsufficientFunds`] when the account cannot
    /// cover the extra stake.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;
        if self.hands[self.cursor].hand.len() != 2 {
            return Err(ActionError::CannotDouble);
        }
        let stake = self.hands[self.cursor].stake;
        self.account.place_wager(stake)?;
        let card = self.draw_card();
        let seat = &mut self.hands[self.cursor];
        seat.stake += stake;
        seat.hand.add_card(card);
        seat.status = if seat.hand.is_bust() {
            HandStatus::Busted
        } else {
            HandStatus::Stood
        };
        self.advance();
        Ok(card)
    }

    /// Splits the active pair into two hands and deals one card to each.
    /// Returns the two cards dealt, in order.
    ///
    /// The new hand takes a stake equal to the split hand's and counts as
    /// an additional round played. Neither hand can split again, and
    /// neither is eligible for a natural blackjack.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::OutOfTurn`] outside the player's turn,
    /// [`ActionError::CannotSplit`] when the hand is not a splittable
    /// pair, or [`ActionError::InsufficientFunds`] when the account cannot
    /// cover the second stake.
    pub fn split(&mut self) -> Result<(Card, Card), ActionError> {
        self.ensure_player_turn()?;
        let seat = &self.hands[self.cursor];
        if seat.hand.is_from_split() || !seat.hand.can_split() {
            return Err(ActionError::CannotSplit);
        }
        let stake = seat.stake;
        let first = seat.hand.cards()[0];
        let second = seat.hand.cards()[1];
        self.account.place_wager(stake)?;
        self.account.record_round();

        let near_card = self.draw_card();
        let far_card = self.draw_card();
        let mut near = Hand::from_split(first);
        near.add_card(near_card);
        let mut far = Hand::from_split(second);
        far.add_card(far_card);
        self.hands[self.cursor] = PlayerHand {
            status: HandStatus::Active,
            hand: near,
            stake,
        };
        self.hands.insert(
            self.cursor + 1,
            PlayerHand {
                status: HandStatus::Active,
                hand: far,
                stake,
            },
        );
        Ok((near_card, far_card))
    }

    /// Returns an error unless a player hand is awaiting a decision.
    const fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if matches!(self.phase, RoundPhase::PlayerTurn) {
            Ok(())
        } else {
            Err(ActionError::OutOfTurn)
        }
    }
}
