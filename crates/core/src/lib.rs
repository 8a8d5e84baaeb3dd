//! `minibank-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod capability;
pub mod entity;
pub mod error;
pub mod id;
pub mod money;

pub use capability::{Depositable, Withdrawable};
pub use entity::Entity;
pub use error::{AccountError, AccountResult};
pub use id::AccountId;
pub use money::Money;
