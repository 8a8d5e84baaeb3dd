//! Fixed demonstration sequence for the account model.
//!
//! Walks two accounts with divergent withdrawal policies through deposits,
//! withdrawals, and transfers in both directions, reporting every step on the
//! log stream.

use chrono::Utc;
use minibank_accounts::{transfer, Account, OverdraftAccount};
use minibank_core::{AccountId, Depositable, Money, Withdrawable};

fn main() {
    minibank_observability::init();

    let mut maz = Account::open(AccountId::new(), "Maz", Money::from_major(50), Utc::now());
    maz.deposit(Money::from_major(20));
    tracing::info!(owner = maz.owner(), balance = %maz.balance(), "after deposit");

    let mut delphini = OverdraftAccount::open(
        AccountId::new(),
        "Delphini",
        Money::from_major(100),
        Money::from_major(20),
        Utc::now(),
    );
    delphini.deposit(Money::from_major(30));
    tracing::info!(owner = delphini.owner(), balance = %delphini.balance(), "after deposit");

    // Overdraft path: the withdrawal completes anyway, fee on top.
    if let Err(err) = delphini.withdraw(Money::from_major(150)) {
        tracing::info!(balance = %delphini.balance(), "{err}");
    }

    // Plain account path: rejected, balance untouched.
    if let Err(err) = maz.withdraw(Money::from_major(150)) {
        tracing::warn!(balance = %maz.balance(), "withdrawal rejected: {err}");
    }

    // Put money back before the transfers.
    delphini.deposit(Money::from_major(100));

    tracing::info!(
        maz = %maz.balance(),
        delphini = %delphini.balance(),
        "balances before transfers"
    );

    if let Err(err) = transfer(&mut maz, &mut delphini, Money::from_major(100)) {
        tracing::warn!("could not complete transfer: {err}");
    }

    if let Err(err) = transfer(&mut delphini, &mut maz, Money::from_major(100)) {
        tracing::warn!("could not complete transfer: {err}");
    }

    tracing::info!(
        maz = %maz.balance(),
        delphini = %delphini.balance(),
        "balances after transfers"
    );
}
