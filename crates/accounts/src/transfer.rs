//! Cross-account transfer orchestration.

use minibank_core::{AccountError, AccountResult, Depositable, Money, Withdrawable};

/// Move `amount` from `debtor` to `creditor`.
///
/// The debtor and creditor are taken as capabilities, not concrete variants,
/// so any withdraw-capable account can fund any deposit-capable account.
///
/// Failure semantics:
/// - `InsufficientBalance` from the debtor aborts the transfer; the creditor
///   is never credited and the debtor's balance is unchanged.
/// - `OverdraftIncurred` does not abort: the debit already happened, the
///   event is logged, and the creditor is credited.
///
/// Returns `Ok(())` whenever the deposit step is reached.
pub fn transfer(
    debtor: &mut dyn Withdrawable,
    creditor: &mut dyn Depositable,
    amount: Money,
) -> AccountResult<()> {
    match debtor.withdraw(amount) {
        Ok(_) => {}
        Err(AccountError::OverdraftIncurred { balance, fee }) => {
            tracing::info!(%balance, %fee, %amount, "debtor incurred overdraft, transfer proceeds");
        }
        Err(err) => return Err(err),
    }
    creditor.deposit(amount);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Account, OverdraftAccount};
    use chrono::Utc;
    use minibank_core::AccountId;

    fn plain(balance: i64) -> Account {
        Account::open(AccountId::new(), "Maz", Money::from_major(balance), Utc::now())
    }

    fn overdraftable(balance: i64, fee: i64) -> OverdraftAccount {
        OverdraftAccount::open(
            AccountId::new(),
            "Delphini",
            Money::from_major(balance),
            Money::from_major(fee),
            Utc::now(),
        )
    }

    #[test]
    fn covered_transfer_moves_the_amount() {
        let mut debtor = plain(100);
        let mut creditor = plain(10);

        transfer(&mut debtor, &mut creditor, Money::from_major(40)).unwrap();

        assert_eq!(debtor.balance(), Money::from_major(60));
        assert_eq!(creditor.balance(), Money::from_major(50));
    }

    #[test]
    fn insufficient_balance_aborts_before_deposit() {
        let mut debtor = plain(70);
        let mut creditor = overdraftable(90, 20);

        let err = transfer(&mut debtor, &mut creditor, Money::from_major(100)).unwrap_err();

        assert_eq!(err, AccountError::InsufficientBalance);
        assert_eq!(debtor.balance(), Money::from_major(70));
        assert_eq!(creditor.balance(), Money::from_major(90));
    }

    #[test]
    fn overdraft_on_debtor_still_completes_the_transfer() {
        let mut debtor = overdraftable(80, 20);
        let mut creditor = plain(70);

        transfer(&mut debtor, &mut creditor, Money::from_major(100)).unwrap();

        // 80 - 20 (fee) - 100 = -40; creditor receives the full amount.
        assert_eq!(debtor.balance(), Money::from_major(-40));
        assert_eq!(creditor.balance(), Money::from_major(170));
    }
}
