//! Shared balance storage for the account variants.

use serde::{Deserialize, Serialize};

use minibank_core::Money;

/// Balance holder shared by both account variants through composition.
///
/// `Funds` knows how to move the number; it enforces no policy. Whether a
/// debit is allowed to run the balance negative is decided by the account
/// variant that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct Funds {
    balance: Money,
}

impl Funds {
    pub(crate) fn new(opening_balance: Money) -> Self {
        Self {
            balance: opening_balance,
        }
    }

    pub(crate) fn balance(&self) -> Money {
        self.balance
    }

    /// Add to the balance. No validation of the amount.
    pub(crate) fn credit(&mut self, amount: Money) {
        self.balance += amount;
    }

    /// Subtract from the balance without any coverage check.
    ///
    /// Callers own the policy: the plain account checks coverage before
    /// calling this, the overdraft account calls it regardless.
    pub(crate) fn debit_unchecked(&mut self, amount: Money) -> Money {
        self.balance -= amount;
        self.balance
    }

    pub(crate) fn covers(&self, amount: Money) -> bool {
        self.balance >= amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debit_unchecked_may_go_negative() {
        let mut funds = Funds::new(Money::from_major(10));
        let balance = funds.debit_unchecked(Money::from_major(25));
        assert_eq!(balance, Money::from_major(-15));
        assert_eq!(funds.balance(), Money::from_major(-15));
    }

    #[test]
    fn covers_is_inclusive() {
        let funds = Funds::new(Money::from_major(10));
        assert!(funds.covers(Money::from_major(10)));
        assert!(!funds.covers(Money::from_minor(1001)));
    }
}
