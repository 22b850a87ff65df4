//! Player bankroll and session statistics.

use crate::error::WagerError;
use crate::round2;

/// A player's bankroll and running session statistics.
///
/// Wagers are debited the moment they are placed and payouts are credited
/// back when a round settles, so the balance always reflects money actually
/// in hand and never goes negative. Every balance movement is kept to cents.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    balance: f64,
    wagered: f64,
    net_earnings: f64,
    rounds_played: u32,
    rounds_won: u32,
    deposited: f64,
}

impl Account {
    /// Creates an empty account.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            balance: 0.0,
            wagered: 0.0,
            net_earnings: 0.0,
            rounds_played: 0,
            rounds_won: 0,
            deposited: 0.0,
        }
    }

    /// Adds funds to the balance.
    pub fn deposit(&mut self, amount: f64) {
        self.balance = round2(self.balance + amount);
        self.deposited = round2(self.deposited + amount);
    }

    /// Debits a wager from the balance.
    ///
    /// The debit happens only when the balance covers the amount; wagering
    /// the exact balance is allowed, while a `NaN` amount never qualifies
    /// and cannot reach the ledger.
    ///
    /// # Errors
    ///
    /// Returns [`WagerError::InsufficientFunds`] when the balance does not
    /// cover the amount.
    pub fn place_wager(&mut self, amount: f64) -> Result<(), WagerError> {
        if self.balance >= amount {
            self.balance = round2(self.balance - amount);
            self.wagered = round2(self.wagered + amount);
            self.net_earnings = round2(self.net_earnings - amount);
            Ok(())
        } else {
            Err(WagerError::InsufficientFunds)
        }
    }

    /// Credits a winning payout to the balance and counts the win.
    pub fn credit_win(&mut self, amount: f64) {
        self.balance = round2(self.balance + amount);
        self.net_earnings = round2(self.net_earnings + amount);
        self.rounds_won += 1;
    }

    /// Credits a pushed stake back to the balance, netting out the debit
    /// made when the wager was placed.
    pub fn credit_push(&mut self, amount: f64) {
        self.balance = round2(self.balance + amount);
        self.net_earnings = round2(self.net_earnings + amount);
    }

    /// Records that a round was dealt.
    pub fn record_round(&mut self) {
        self.rounds_played += 1;
    }

    /// Withdraws the entire balance and returns it.
    pub fn cash_out(&mut self) -> f64 {
        let amount = self.balance;
        self.balance = 0.0;
        amount
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> f64 {
        self.balance
    }

    /// Returns the total amount wagered over the life of the account.
    #[must_use]
    pub const fn wagered(&self) -> f64 {
        self.wagered
    }

    /// Returns winnings minus wagers over the life of the account.
    #[must_use]
    pub const fn net_earnings(&self) -> f64 {
        self.net_earnings
    }

    /// Returns the number of rounds dealt to this account.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Returns the number of rounds won.
    #[must_use]
    pub const fn rounds_won(&self) -> u32 {
        self.rounds_won
    }

    /// Returns the total amount ever deposited.
    #[must_use]
    pub const fn deposited(&self) -> f64 {
        self.deposited
    }

    /// Returns the fraction of dealt rounds that were won, or zero before
    /// any round has been played.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            f64::from(self.rounds_won) / f64::from(self.rounds_played)
        }
    }

    /// Returns net earnings as a fraction of the total wagered, or zero
    /// before any wager has been placed.
    #[must_use]
    pub fn return_on_wager(&self) -> f64 {
        if self.wagered == 0.0 {
            0.0
        } else {
            self.net_earnings / self.wagered
        }
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposits_accumulate_and_cash_out_empties() {
        let mut account = Account::new();
        account.deposit(60.0);
        account.deposit(40.0);
        assert_eq!(account.balance(), 100.0);
        assert_eq!(account.deposited(), 100.0);
        assert_eq!(account.cash_out(), 100.0);
        assert_eq!(account.balance(), 0.0);
        assert_eq!(account.deposited(), 100.0);
    }

    #[test]
    fn wager_above_balance_is_refused_untouched() {
        let mut account = Account::new();
        account.deposit(10.0);
        let err = account.place_wager(10.5).unwrap_err();
        assert_eq!(err, WagerError::InsufficientFunds);
        assert_eq!(account.balance(), 10.0);
        assert_eq!(account.wagered(), 0.0);
        assert_eq!(account.net_earnings(), 0.0);
    }

    #[test]
    fn nan_wager_is_refused() {
        let mut account = Account::new();
        account.deposit(10.0);
        let err = account.place_wager(f64::NAN).unwrap_err();
        assert_eq!(err, WagerError::InsufficientFunds);
        assert_eq!(account.balance(), 10.0);
        assert_eq!(account.wagered(), 0.0);
        assert_eq!(account.net_earnings(), 0.0);
    }

    #[test]
    fn wagering_the_exact_balance_is_allowed() {
        let mut account = Account::new();
        account.deposit(5.0);
        assert!(account.place_wager(5.0).is_ok());
        assert_eq!(account.balance(), 0.0);
    }

    #[test]
    fn wager_then_payout_updates_the_ledger() {
        let mut account = Account::new();
        account.deposit(100.0);
        account.place_wager(2.5).unwrap();
        assert_eq!(account.balance(), 97.5);
        assert_eq!(account.wagered(), 2.5);
        assert_eq!(account.net_earnings(), -2.5);
        account.credit_win(6.25);
        assert_eq!(account.balance(), 103.75);
        assert_eq!(account.net_earnings(), 3.75);
        assert_eq!(account.rounds_won(), 1);
        assert_eq!(account.return_on_wager(), 1.5);
    }

    #[test]
    fn push_refund_nets_out_the_wager() {
        let mut account = Account::new();
        account.deposit(50.0);
        account.place_wager(10.0).unwrap();
        account.credit_push(10.0);
        assert_eq!(account.balance(), 50.0);
        assert_eq!(account.net_earnings(), 0.0);
        assert_eq!(account.rounds_won(), 0);
    }

    #[test]
    fn balances_stay_to_the_cent() {
        let mut account = Account::new();
        account.deposit(0.1);
        account.deposit(0.2);
        assert_eq!(account.balance(), 0.3);
    }

    #[test]
    fn win_rate_counts_wins_against_rounds() {
        let mut account = Account::new();
        assert_eq!(account.win_rate(), 0.0);
        assert_eq!(account.return_on_wager(), 0.0);
        account.deposit(20.0);
        for _ in 0..4 {
            account.record_round();
        }
        account.place_wager(2.0).unwrap();
        account.credit_win(4.0);
        assert_eq!(account.rounds_played(), 4);
        assert_eq!(account.rounds_won(), 1);
        assert_eq!(account.win_rate(), 0.25);
    }
}
