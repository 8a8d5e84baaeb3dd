//! Capability traits for account behavior.
//!
//! The two account variants share the deposit capability but diverge on
//! withdrawal policy. Modeling each capability as its own trait (instead of a
//! subtype relationship) lets an orchestration accept any depositor and any
//! withdrawer independently, without claiming the variants are substitutable.

use crate::error::AccountResult;
use crate::money::Money;

/// Capability: funds can be deposited.
pub trait Depositable {
    /// Add `amount` to the balance unconditionally.
    ///
    /// The amount is not validated; zero and negative deposits pass through
    /// as-is. That permissiveness is part of the model.
    fn deposit(&mut self, amount: Money);
}

/// Capability: funds can be withdrawn, yielding the resulting balance.
pub trait Withdrawable {
    /// Withdraw `amount`, returning the post-withdrawal balance.
    ///
    /// Error contract:
    /// - `InsufficientBalance`: the withdrawal was rejected and the balance is
    ///   unchanged.
    /// - `OverdraftIncurred`: the withdrawal (plus a fee) was applied anyway;
    ///   the error carries the resulting balance. Non-fatal.
    ///
    /// Which of the two a given implementor can produce depends on its
    /// withdrawal policy.
    fn withdraw(&mut self, amount: Money) -> AccountResult<Money>;
}
