//! Round phases, hand statuses and player decisions.

/// Phase of a round.
///
/// A round moves strictly forward: player hands are played out first, the
/// dealer acts only if at least one player hand stood, and settlement
/// happens exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    /// A player hand is awaiting a decision.
    PlayerTurn,
    /// Every player hand is resolved and at least one stood; the dealer
    /// has yet to play.
    DealerTurn,
    /// Play is finished; the round can be settled.
    RoundOver,
    /// The round has been settled and paid out.
    Complete,
}

/// Status of a single player hand within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandStatus {
    /// The hand is still awaiting decisions.
    Active,
    /// The hand stood, by choice or as a dealt natural.
    Stood,
    /// The hand went over 21 and is out of the round.
    Busted,
}

/// A decision the player can take on the active hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    /// Draw one more card.
    Hit,
    /// End the hand at its current value.
    Stand,
    /// Double the stake, draw exactly one card, then stand.
    Double,
    /// Separate a pair into two hands, each with its own stake.
    Split,
}
