//! Error types for account and round operations.

use thiserror::Error;

/// Errors that can occur when placing a wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WagerError {
    /// Insufficient funds to cover the wager.
    #[error("insufficient funds to cover the wager")]
    InsufficientFunds,
}

/// Errors that can occur when opening a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Stake is below the table minimum.
    #[error("stake is below the table minimum")]
    BelowMinimum,
    /// Insufficient funds for the stake.
    #[error("insufficient funds for the stake")]
    InsufficientFunds,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No hand is awaiting a player decision.
    #[error("no hand is awaiting a player decision")]
    OutOfTurn,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
}

/// Errors that can occur during dealer play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// The dealer acts only after every player hand is resolved.
    #[error("the dealer acts only after every player hand is resolved")]
    OutOfTurn,
}

/// Errors that can occur during settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// The round is still in progress.
    #[error("the round is still in progress")]
    InProgress,
    /// The round has already been settled.
    #[error("the round has already been settled")]
    AlreadySettled,
}

impl From<WagerError> for BetError {
    fn from(err: WagerError) -> Self {
        match err {
            WagerError::InsufficientFunds => Self::InsufficientFunds,
        }
    }
}

impl From<WagerError> for ActionError {
    fn from(err: WagerError) -> Self {
        match err {
            WagerError::InsufficientFunds => Self::InsufficientFunds,
        }
    }
}
