//! Account model (two withdrawal policies, one transfer orchestration).
//!
//! Pure domain logic only: no IO beyond tracing, no persistence concerns.

pub mod account;
pub mod overdraft;
pub mod transfer;

mod funds;

pub use account::Account;
pub use overdraft::OverdraftAccount;
pub use transfer::transfer;
