//! A multi-deck blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that drives one round of play from
//! the opening deal through player decisions, dealer play and settlement,
//! backed by a persistent [`Shoe`] and a player [`Account`].
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{Account, Round, Shoe, TableOptions};
//!
//! let options = TableOptions::default();
//! let mut shoe = Shoe::new(options, 42);
//! let mut account = Account::new();
//! account.deposit(100.0);
//! let round = Round::begin(&mut shoe, &mut account, options, 10.0);
//! let _ = round;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;
#[cfg(test)]
extern crate std;

pub mod account;
pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod shoe;

// Re-export main types
pub use account::Account;
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, BetError, DealerError, SettleError, WagerError};
pub use hand::Hand;
pub use options::TableOptions;
pub use result::{HandOutcome, HandResult, RoundResult};
pub use round::{HandStatus, PlayerAction, PlayerHand, Round, RoundPhase};
pub use shoe::{Draw, Shoe};

/// Rounds a currency amount to the nearest cent.
#[cfg(feature = "std")]
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds a currency amount to the nearest cent.
#[cfg(not(feature = "std"))]
pub(crate) fn round2(value: f64) -> f64 {
    libm::round(value * 100.0) / 100.0
}
