use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use minibank_core::{AccountError, AccountId, AccountResult, Depositable, Entity, Money, Withdrawable};

use crate::funds::Funds;

/// Overdraft account: withdrawals always complete, with a fee when uncovered.
///
/// When a withdrawal exceeds the balance, the fee is charged first and the
/// full amount is debited regardless, so the balance can go arbitrarily
/// negative. The resulting `OverdraftIncurred` error is informational; the
/// debit has already happened. This never-reject policy is the deliberate
/// divergence from [`Account`](crate::Account), not an oversight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverdraftAccount {
    id: AccountId,
    owner: String,
    funds: Funds,
    /// Fixed charge per overdraft-triggering withdrawal.
    fee: Money,
    opened_at: DateTime<Utc>,
}

impl OverdraftAccount {
    pub fn open(
        id: AccountId,
        owner: impl Into<String>,
        opening_balance: Money,
        fee: Money,
        opened_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner: owner.into(),
            funds: Funds::new(opening_balance),
            fee,
            opened_at,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Money {
        self.funds.balance()
    }

    pub fn fee(&self) -> Money {
        self.fee
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }
}

impl Entity for OverdraftAccount {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Depositable for OverdraftAccount {
    fn deposit(&mut self, amount: Money) {
        self.funds.credit(amount);
    }
}

impl Withdrawable for OverdraftAccount {
    fn withdraw(&mut self, amount: Money) -> AccountResult<Money> {
        if self.funds.covers(amount) {
            return Ok(self.funds.debit_unchecked(amount));
        }

        // Fee first, then the amount itself. Order matters only for the
        // intermediate value; the final balance is b - fee - amount.
        self.funds.debit_unchecked(self.fee);
        let balance = self.funds.debit_unchecked(amount);
        Err(AccountError::OverdraftIncurred {
            balance,
            fee: self.fee,
        })
    }
}
