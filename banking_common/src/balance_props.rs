//! Property-based tests for account bookkeeping.

use proptest::prelude::*;

use crate::accounts::AccountType;
use crate::banking_app::BankingApplication;
use crate::config::BankConfig;
use crate::errors::BankingError;

#[derive(Clone, Debug)]
enum Op {
    Deposit(f64),
    Withdraw(f64),
    Interest(f64),
}

/// Amounts in cents from -1,000.00 to 10,000.00, negative ones included on purpose.
fn amount() -> impl Strategy<Value = f64> {
    (-100_000i64..1_000_000i64).prop_map(|cents| cents as f64 / 100.0)
}

fn rate() -> impl Strategy<Value = f64> {
    (0u32..=200u32).prop_map(|bp| bp as f64 / 1000.0)
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        amount().prop_map(Op::Deposit),
        amount().prop_map(Op::Withdraw),
        rate().prop_map(Op::Interest),
    ]
}

fn account_type() -> impl Strategy<Value = AccountType> {
    prop_oneof![
        Just(AccountType::Savings),
        Just(AccountType::Checking),
        Just(AccountType::Other("Brokerage".to_string())),
    ]
}

fn logged_in() -> BankingApplication {
    let mut app = BankingApplication::new(BankConfig::default());
    app.register("alice", "secret").unwrap();
    app.login("alice", "secret").unwrap();
    app
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The balance always equals the initial deposit plus the signed sum of the transactions.
    #[test]
    fn prop_balance_matches_transactions(
        initial in amount(),
        account_type in account_type(),
        ops in prop::collection::vec(op(), 0..40),
    ) {
        let mut app = logged_in();
        let number = app.open_account("Alice", account_type, initial).unwrap();

        for op in ops {
            let _ = match op {
                Op::Deposit(amount) => app.deposit(&number, amount),
                Op::Withdraw(amount) => app.withdraw(&number, amount),
                Op::Interest(rate) => app.add_monthly_interest(&number, rate),
            };
        }

        let account = app.get_account(&number).unwrap();
        let replayed = account.initial_deposit()
            + account.transactions().iter().map(|tx| tx.signed_amount()).sum::<f64>();

        prop_assert!(close(replayed, account.balance()), "{} != {}", replayed, account.balance());
    }

    /// A withdrawal larger than the balance changes nothing.
    #[test]
    fn prop_overdraft_changes_nothing(
        initial in 0i64..1_000_000i64,
        excess in 1i64..1_000_000i64,
    ) {
        let mut app = logged_in();
        let initial = initial as f64 / 100.0;
        let number = app.open_account("Alice", AccountType::Checking, initial).unwrap();
        app.deposit(&number, 1.0).unwrap();

        let balance = app.check_balance(&number).unwrap();
        let result = app.withdraw(&number, balance + excess as f64 / 100.0);

        let is_insufficient = matches!(result, Err(BankingError::InsufficientFunds { .. }));
        prop_assert!(is_insufficient);
        prop_assert_eq!(balance, app.check_balance(&number).unwrap());
        prop_assert_eq!(1, app.get_account(&number).unwrap().transactions().len());
    }

    /// Interest is never applied to anything but Savings accounts.
    #[test]
    fn prop_interest_only_for_savings(
        initial in amount(),
        rate in rate(),
        other in "[A-Za-z]{1,12}",
    ) {
        let mut app = logged_in();
        let account_type: AccountType = other.parse().unwrap();
        prop_assume!(account_type != AccountType::Savings);

        let number = app.open_account("Alice", account_type, initial).unwrap();

        prop_assert_eq!(
            Err(BankingError::UnsupportedAccountTypeForInterest(number.clone())),
            app.add_monthly_interest(&number, rate)
        );
        prop_assert_eq!(initial, app.check_balance(&number).unwrap());
        prop_assert!(app.get_account(&number).unwrap().transactions().is_empty());
    }
}
