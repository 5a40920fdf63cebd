//! Property-based tests for the exact numeric primitives.
//!
//! - Decimal text parses to the same value as the decimal itself
//! - Floor and ceiling bracket every value
//! - Display output parses back to the same rational

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::Rational;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* decimal, parsing its text agrees with the exact conversion.
    #[test]
    fn prop_decimal_text_matches_decimal(mantissa in -1_000_000_000_000i64..1_000_000_000_000, scale in 0u32..12) {
        let decimal = Decimal::new(mantissa, scale);
        let parsed = Rational::parse_decimal(&decimal.to_string()).unwrap();
        prop_assert_eq!(parsed, Rational::from(decimal));
    }

    /// *For any* rational, `floor <= value <= ceil` and they differ by at most one.
    #[test]
    fn prop_floor_and_ceil_bracket(numerator in -1_000_000i64..1_000_000, denominator in 1i64..10_000) {
        let value = Rational::new(numerator, denominator).unwrap();
        let floor = Rational::from_integer(value.floor());
        let ceil = Rational::from_integer(value.ceil());

        prop_assert!(floor <= value && value <= ceil);
        prop_assert!(&ceil - &floor <= Rational::one());
        prop_assert_eq!(&floor + &value.fract(), value);
    }

    /// *For any* rational, the displayed form parses back unchanged.
    #[test]
    fn prop_display_parses_back(numerator in any::<i64>(), denominator in 1i64..i64::MAX) {
        let value = Rational::new(numerator, denominator).unwrap();
        prop_assert_eq!(value.to_string().parse::<Rational>().unwrap(), value);
    }
}
