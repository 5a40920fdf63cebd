//! Property-based tests for monetary arithmetic.
//!
//! - Fair division preserves the total and spreads it evenly
//! - Subtraction picks the kind by sign and can be undone
//! - Negation is an involution
//! - Rounding picks the kind by sign and never fails
//! - Operations across currencies are type errors

use num_bigint::BigInt;
use proptest::prelude::*;
use strictmoney_shared::{MoneyError, Rational};

use super::{Monetary, Round};
use crate::currency::Currency;
use crate::currency::catalog::{BHD, JPY, NOK, SEK};
use crate::values::{Balance, Money, Overdraft};

/// Strategy to pick a currency with 0, 2 or 3 decimal places.
fn currency() -> impl Strategy<Value = Currency> {
    prop_oneof![Just(*SEK), Just(*JPY), Just(*BHD)]
}

/// Strategy to generate amounts (0 to 10,000,000,000 sub-units).
fn monies() -> impl Strategy<Value = Money> {
    (0u64..10_000_000_000, currency())
        .prop_map(|(subunits, currency)| Money::from_subunit(subunits, currency))
}

/// Strategy to generate deficits (1 to 10,000,000,000 sub-units).
fn overdrafts() -> impl Strategy<Value = Overdraft> {
    (1u64..10_000_000_000, currency()).prop_map(|(subunits, currency)| {
        Overdraft::from_subunit(subunits, currency).unwrap()
    })
}

/// Strategy to generate any monetary value in SEK.
fn sek_values() -> impl Strategy<Value = Monetary> {
    prop_oneof![
        (0u64..1_000_000).prop_map(|s| Monetary::from(Money::from_subunit(s, *SEK))),
        (1u64..1_000_000)
            .prop_map(|s| Monetary::from(Overdraft::from_subunit(s, *SEK).unwrap())),
        (-1_000_000i64..1_000_000, 1i64..1000)
            .prop_map(|(n, d)| Monetary::from(SEK.fraction_from_parts(n, d).unwrap())),
    ]
}

fn rounding_modes() -> impl Strategy<Value = Round> {
    prop_oneof![
        Just(Round::Down),
        Just(Round::Up),
        Just(Round::HalfUp),
        Just(Round::HalfEven),
        Just(Round::HalfDown),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Fair division
    // =========================================================================

    /// *For any* amount and part count, the shares sum to the amount, differ
    /// by at most one sub-unit and come largest first.
    #[test]
    fn prop_split_is_fair(money in monies(), parts in 1usize..200) {
        let currency = money.currency();
        let shares = money.split(parts).unwrap();

        prop_assert_eq!(shares.len(), parts);

        let total = shares
            .iter()
            .try_fold(currency.zero(), |acc, share| acc.checked_add(share))
            .unwrap();
        prop_assert_eq!(&total, &money);

        let max = shares.first().unwrap();
        let min = shares.last().unwrap();
        let spread = max.checked_sub(min).unwrap();
        prop_assert!(spread == Balance::Money(currency.zero())
            || spread == Balance::Money(currency.one_subunit()));

        prop_assert!(shares.windows(2).all(|w| w[0] >= w[1]));
    }

    /// *For any* deficit, the split shares add back to the deficit.
    #[test]
    fn prop_overdraft_split_preserves_total(overdraft in overdrafts(), parts in 1usize..50) {
        let currency = overdraft.currency();
        let total = overdraft
            .split(parts)
            .unwrap()
            .iter()
            .try_fold(Balance::Money(currency.zero()), |acc, share| acc.checked_add(share))
            .unwrap();
        prop_assert_eq!(total, Balance::Overdraft(overdraft));
    }

    // =========================================================================
    // Subtraction sign law
    // =========================================================================

    /// *For any* two amounts, `a - b` is `Money` iff `a >= b`, and adding `b`
    /// back reconstitutes `a`.
    #[test]
    fn prop_sub_sign_law(a in 0u64..1_000_000, b in 0u64..1_000_000) {
        let a = Money::from_subunit(a, *SEK);
        let b = Money::from_subunit(b, *SEK);
        let difference = a.checked_sub(&b).unwrap();

        prop_assert_eq!(difference.is_money(), a >= b);

        let restored = Monetary::from(difference).add(b).unwrap();
        prop_assert_eq!(restored, Monetary::from(a));
    }

    // =========================================================================
    // Negation
    // =========================================================================

    /// *For any* value, negating twice is the identity.
    #[test]
    fn prop_negation_is_involution(value in sek_values()) {
        prop_assert_eq!(value.neg().neg(), value);
    }

    // =========================================================================
    // Rounding
    // =========================================================================

    /// *For any* fraction and mode, `round_to_either` yields `Money` iff the
    /// rounded integer is non-negative.
    #[test]
    fn prop_round_either_matches_sign(
        numerator in -1_000_000i64..1_000_000,
        denominator in 1i64..1000,
        mode in rounding_modes(),
    ) {
        let fraction = SEK.fraction_from_parts(numerator, denominator).unwrap();
        let rounded = mode.apply(fraction.value());
        let balance = fraction.round_to_either(mode);

        prop_assert_eq!(balance.is_money(), rounded >= BigInt::from(0));
        prop_assert_eq!(balance.signed_subunits(), rounded);
        prop_assert_eq!(fraction.round_to_money(mode).is_ok(), balance.is_money());
        prop_assert_eq!(fraction.round_to_overdraft(mode).is_ok(), balance.is_overdraft());
    }

    /// *For any* fraction, every mode lands on the floor or the ceiling.
    #[test]
    fn prop_rounding_is_bounded(
        numerator in -1_000_000i64..1_000_000,
        denominator in 1i64..1000,
        mode in rounding_modes(),
    ) {
        let value = Rational::new(numerator, denominator).unwrap();
        let rounded = mode.apply(&value);
        prop_assert!(rounded == value.floor() || rounded == value.ceil());
    }

    // =========================================================================
    // Currency mismatch
    // =========================================================================

    /// *For any* pair of values in different currencies, addition,
    /// subtraction and comparison are type errors.
    #[test]
    fn prop_currency_mismatch_is_type_error(value in sek_values(), subunits in 0u64..1000) {
        let other = Monetary::from(Money::from_subunit(subunits, *NOK));

        for result in [value.add(other.clone()), value.sub(other.clone())] {
            let err = result.unwrap_err();
            prop_assert!(err.is_type_error());
            prop_assert!(matches!(err, MoneyError::CurrencyMismatch { .. }), "expected CurrencyMismatch, got {:?}", err);
        }
        prop_assert!(value.try_cmp(&other).is_err());
    }

    // =========================================================================
    // Integer agreement
    // =========================================================================

    /// *For any* sequence of signed deltas, accumulating them as monetary
    /// values agrees with integer arithmetic.
    #[test]
    fn prop_accumulation_matches_integers(deltas in prop::collection::vec(-100_000i64..100_000, 1..30)) {
        let mut balance = Monetary::from(SEK.zero());
        let mut expected = 0i64;

        for delta in deltas {
            let step = Balance::from_signed_subunits(BigInt::from(delta.abs()), *SEK);
            let next = if delta >= 0 { balance.add(step) } else { balance.sub(step) };
            balance = next.unwrap();
            expected += delta;
        }

        let expected = Balance::from_signed_subunits(BigInt::from(expected), *SEK);
        prop_assert_eq!(balance, Monetary::from(expected));
    }
}
