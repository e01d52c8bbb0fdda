use bank_account::{Account, AccountPolicy, Rejection};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Amounts with up to four decimal places, as the CLI would read them.
fn amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|minor| Decimal::new(minor, 4))
}

fn non_positive() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..=0i64).prop_map(|minor| Decimal::new(minor, 4))
}

fn balance() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|minor| Decimal::new(minor, 4))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn construction_accepts_any_non_negative_balance(initial in balance()) {
        let acc = Account::new("holder", initial).unwrap();
        prop_assert!(acc.is_active());
        prop_assert_eq!(acc.balance(), initial);
    }

    #[test]
    fn construction_rejects_any_negative_balance(minor in 1i64..1_000_000_000i64) {
        prop_assert!(Account::new("holder", Decimal::new(-minor, 4)).is_err());
    }

    #[test]
    fn deposit_adds_exact_amount(initial in balance(), amount in amount()) {
        let mut acc = Account::new("holder", initial).unwrap();
        prop_assert!(acc.deposit(amount).is_ok());
        prop_assert_eq!(acc.balance(), initial + amount);
        prop_assert_eq!(acc.withdrawn_today(), Decimal::ZERO);
    }

    #[test]
    fn non_positive_amounts_change_nothing(initial in balance(), amount in non_positive()) {
        let mut acc = Account::new("holder", initial).unwrap();
        let before = acc.clone();
        prop_assert_eq!(acc.deposit(amount), Err(Rejection::NonPositiveAmount(amount)));
        prop_assert_eq!(acc.withdraw(amount), Err(Rejection::NonPositiveAmount(amount)));
        prop_assert_eq!(&acc, &before);
    }

    #[test]
    fn withdraw_succeeds_exactly_within_balance_and_limit(
        initial in balance(),
        already in 0i64..=1000i64,
        amount in amount(),
    ) {
        let mut acc = Account::new("holder", initial + Decimal::from(already)).unwrap();
        if already > 0 {
            acc.withdraw(Decimal::from(already)).unwrap();
        }
        let before = acc.clone();

        let allowed = amount <= acc.balance()
            && acc.withdrawn_today() + amount <= acc.daily_limit();

        match acc.withdraw(amount) {
            Ok(()) => {
                prop_assert!(allowed);
                prop_assert_eq!(acc.balance(), before.balance() - amount);
                prop_assert_eq!(acc.withdrawn_today(), before.withdrawn_today() + amount);
            }
            Err(_) => {
                prop_assert!(!allowed);
                prop_assert_eq!(&acc, &before);
            }
        }
        prop_assert!(acc.withdrawn_today() <= acc.daily_limit());
    }

    #[test]
    fn deposit_then_withdraw_restores_balance(initial in balance(), minor in 1i64..=10_000_000i64) {
        let amount = Decimal::new(minor, 4);
        let mut acc = Account::new("holder", initial).unwrap();
        acc.deposit(amount).unwrap();
        acc.withdraw(amount).unwrap();
        prop_assert_eq!(acc.balance(), initial);
    }

    #[test]
    fn transfer_conserves_total(
        source in balance(),
        destination in balance(),
        amount in amount(),
    ) {
        let mut src = Account::new("source", source).unwrap();
        let mut dst = Account::new("destination", destination).unwrap();

        let res = src.transfer(&mut dst, amount);

        prop_assert_eq!(src.balance() + dst.balance(), source + destination);
        if res.is_ok() {
            prop_assert_eq!(dst.balance(), destination + amount);
        } else {
            prop_assert_eq!(src.balance(), source);
            prop_assert_eq!(dst.balance(), destination);
        }
    }

    #[test]
    fn closed_account_rejects_every_mutation(amount in amount()) {
        let mut acc = Account::new("holder", Decimal::ZERO).unwrap();
        acc.close().unwrap();
        let mut other = Account::new("other", Decimal::from(5000)).unwrap();

        prop_assert_eq!(acc.deposit(amount), Err(Rejection::Inactive));
        prop_assert_eq!(acc.withdraw(amount), Err(Rejection::Inactive));
        prop_assert_eq!(acc.transfer(&mut other, amount), Err(Rejection::Inactive));
        prop_assert_eq!(other.transfer(&mut acc, amount), Err(Rejection::DestinationInactive));
        prop_assert_eq!(acc.balance(), Decimal::ZERO);
        prop_assert_eq!(other.balance(), Decimal::from(5000));
    }

    #[test]
    fn deposit_past_decimal_range_changes_nothing(
        headroom in 0i64..1_000_000i64,
        excess in 1i64..1_000_000i64,
    ) {
        let mut acc = Account::new("holder", Decimal::MAX - Decimal::from(headroom)).unwrap();
        let before = acc.clone();
        let amount = Decimal::from(headroom + excess);

        let res = acc.deposit(amount);
        prop_assert!(matches!(res, Err(Rejection::BalanceOverflow { .. })), "expected BalanceOverflow, got {:?}", res);
        prop_assert_eq!(&acc, &before);
    }

    #[test]
    fn withdrawn_total_past_decimal_range_changes_nothing(
        headroom in 0i64..1_000_000i64,
        excess in 1i64..1_000_000i64,
    ) {
        let policy = AccountPolicy::new(Decimal::MAX).unwrap();
        let mut acc = Account::with_policy("holder", Decimal::MAX, policy).unwrap();
        let first = Decimal::MAX - Decimal::from(headroom);
        acc.withdraw(first).unwrap();
        acc.deposit(first).unwrap();
        let before = acc.clone();

        let res = acc.withdraw(Decimal::from(headroom + excess));
        prop_assert!(matches!(res, Err(Rejection::DailyLimitExceeded { .. })), "expected DailyLimitExceeded, got {:?}", res);
        prop_assert_eq!(&acc, &before);
    }

    #[test]
    fn transfer_into_full_destination_restores_source(
        headroom in 0i64..500i64,
        excess in 1i64..500i64,
    ) {
        let mut src = Account::new("source", Decimal::from(5000)).unwrap();
        let mut dst = Account::new("destination", Decimal::MAX - Decimal::from(headroom)).unwrap();
        let amount = Decimal::from(headroom + excess);

        prop_assert_eq!(src.transfer(&mut dst, amount), Err(Rejection::RolledBack(amount)));
        prop_assert_eq!(src.balance(), Decimal::from(5000));
        prop_assert_eq!(src.withdrawn_today(), amount);
        prop_assert_eq!(dst.balance(), Decimal::MAX - Decimal::from(headroom));
    }
}
