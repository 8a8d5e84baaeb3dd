use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use minibank_core::{AccountError, AccountId, AccountResult, Depositable, Entity, Money, Withdrawable};

use crate::funds::Funds;

/// Plain account: withdrawals must be covered by the balance.
///
/// The balance never goes negative through `withdraw`; a withdrawal that
/// would take it below zero is rejected with `InsufficientBalance` and leaves
/// the balance unchanged. Deposits are unconditional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    owner: String,
    funds: Funds,
    opened_at: DateTime<Utc>,
}

impl Account {
    /// Open an account with an opening balance.
    ///
    /// `opened_at` is supplied by the caller; the domain never samples the
    /// clock itself.
    pub fn open(
        id: AccountId,
        owner: impl Into<String>,
        opening_balance: Money,
        opened_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner: owner.into(),
            funds: Funds::new(opening_balance),
            opened_at,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Money {
        self.funds.balance()
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Depositable for Account {
    fn deposit(&mut self, amount: Money) {
        self.funds.credit(amount);
    }
}

impl Withdrawable for Account {
    fn withdraw(&mut self, amount: Money) -> AccountResult<Money> {
        if !self.funds.covers(amount) {
            return Err(AccountError::InsufficientBalance);
        }
        Ok(self.funds.debit_unchecked(amount))
    }
}
