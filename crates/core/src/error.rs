//! Domain error model.

use thiserror::Error;

use crate::money::Money;

/// Result type used across the domain layer.
pub type AccountResult<T> = Result<T, AccountError>;

/// Domain-level error for account operations.
///
/// This is a closed set: the two withdrawal outcomes plus identifier parse
/// failures. Not every variant is fatal — `OverdraftIncurred` reports a debit
/// that already happened.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// A withdrawal was rejected because the balance does not cover it.
    /// The account balance is unchanged.
    #[error("insufficient balance")]
    InsufficientBalance,

    /// A withdrawal exceeded the balance and was completed anyway, with the
    /// account's overdraft fee charged on top. Informational: the debit is
    /// already applied and `balance` is the post-debit balance.
    #[error("overdraft incurred, new balance is {balance}")]
    OverdraftIncurred { balance: Money, fee: Money },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl AccountError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// True for error kinds that abort the operation they came from.
    ///
    /// `OverdraftIncurred` is non-fatal: the withdrawal already happened and
    /// callers are expected to carry on.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::OverdraftIncurred { .. })
    }
}
