//! Rounding engine: the only way from a [`SubunitFraction`] back to a
//! concrete [`Money`] or [`Overdraft`].

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Signed;
use serde::{Deserialize, Serialize};
use strictmoney_shared::{MoneyError, MoneyResult, Nat, Rational};

use crate::values::{Balance, Money, Overdraft, SubunitFraction};

/// Rounding mode, applied to the signed value.
///
/// For a value `v` with remainder `r = v - floor(v)`:
/// - `Down` floors, `Up` ceils,
/// - `HalfUp` rounds up when `r >= 1/2`,
/// - `HalfDown` rounds up when `r > 1/2`,
/// - `HalfEven` rounds exact ties to the even neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Round {
    /// Toward negative infinity.
    Down,
    /// Toward positive infinity.
    Up,
    /// Nearest, ties upward.
    HalfUp,
    /// Nearest, ties to even.
    HalfEven,
    /// Nearest, ties downward.
    HalfDown,
}

impl Round {
    /// Rounds an exact rational to an integer.
    #[must_use]
    pub fn apply(self, value: &Rational) -> BigInt {
        let floor = value.floor();
        let remainder = value.fract();
        if remainder.is_zero() {
            return floor;
        }

        let against_half = (&remainder * &Rational::from(2u8)).cmp(&Rational::one());
        let round_up = match self {
            Self::Down => false,
            Self::Up => true,
            Self::HalfUp => against_half != Ordering::Less,
            Self::HalfDown => against_half == Ordering::Greater,
            Self::HalfEven => match against_half {
                Ordering::Less => false,
                Ordering::Greater => true,
                Ordering::Equal => floor.is_odd(),
            },
        };

        if round_up { floor + 1 } else { floor }
    }
}

impl SubunitFraction {
    /// Rounds to a whole number of sub-units and wraps it as `Money`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Parse`] if the rounded amount is negative.
    pub fn round_to_money(&self, mode: Round) -> MoneyResult<Money> {
        let rounded = mode.apply(self.value());
        let subunits = Nat::new(rounded).map_err(|_| {
            MoneyError::parse(format!(
                "Cannot round {self} to Money: the result is negative, use round_to_overdraft"
            ))
        })?;
        Ok(Money::from_subunit(subunits, self.currency()))
    }

    /// Rounds to a whole number of sub-units and wraps it as an `Overdraft`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Parse`] if the rounded amount is not negative.
    pub fn round_to_overdraft(&self, mode: Round) -> MoneyResult<Overdraft> {
        let rounded = mode.apply(self.value());
        if !rounded.is_negative() {
            return Err(MoneyError::parse(format!(
                "Cannot round {self} to Overdraft: the result is not negative, use round_to_money"
            )));
        }
        Ok(Overdraft::from_nonzero(
            Nat::new(-rounded)?,
            self.currency(),
        ))
    }

    /// Rounds to a whole number of sub-units, picking `Money` or `Overdraft`
    /// by sign. Never fails.
    #[must_use]
    pub fn round_to_either(&self, mode: Round) -> Balance {
        Balance::from_signed_subunits(mode.apply(self.value()), self.currency())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::catalog::{NOK, SEK};
    use rstest::rstest;

    fn r(numerator: i64, denominator: i64) -> Rational {
        Rational::new(numerator, denominator).unwrap()
    }

    #[rstest]
    // exact ties
    #[case(r(5, 2), Round::Down, 2)]
    #[case(r(5, 2), Round::Up, 3)]
    #[case(r(5, 2), Round::HalfUp, 3)]
    #[case(r(5, 2), Round::HalfDown, 2)]
    #[case(r(5, 2), Round::HalfEven, 2)]
    #[case(r(7, 2), Round::HalfEven, 4)]
    #[case(r(-5, 2), Round::HalfEven, -2)]
    #[case(r(-5, 2), Round::HalfUp, -2)]
    #[case(r(-5, 2), Round::HalfDown, -3)]
    // off ties
    #[case(r(997, 3), Round::Down, 332)]
    #[case(r(997, 3), Round::Up, 333)]
    #[case(r(997, 3), Round::HalfUp, 332)]
    #[case(r(998, 3), Round::HalfDown, 333)]
    #[case(r(-997, 3), Round::Down, -333)]
    #[case(r(-997, 3), Round::Up, -332)]
    // integers are untouched
    #[case(r(4, 1), Round::Up, 4)]
    #[case(r(-4, 1), Round::Down, -4)]
    fn test_apply(#[case] value: Rational, #[case] mode: Round, #[case] expected: i64) {
        assert_eq!(mode.apply(&value), BigInt::from(expected));
    }

    #[rstest]
    #[case(Round::Down, "3.32")]
    #[case(Round::Up, "3.33")]
    #[case(Round::HalfUp, "3.32")]
    #[case(Round::HalfEven, "3.32")]
    #[case(Round::HalfDown, "3.32")]
    fn test_round_to_money(#[case] mode: Round, #[case] expected: &str) {
        let fraction = SEK.fraction_from_parts(997, 3).unwrap();
        assert_eq!(fraction.round_to_money(mode).unwrap(), SEK.money(expected).unwrap());
        assert_eq!(
            fraction.round_to_either(mode),
            Balance::Money(SEK.money(expected).unwrap())
        );
    }

    #[rstest]
    #[case(Round::Down, "3.33")]
    #[case(Round::Up, "3.32")]
    #[case(Round::HalfUp, "3.32")]
    #[case(Round::HalfEven, "3.32")]
    #[case(Round::HalfDown, "3.32")]
    fn test_round_to_overdraft(#[case] mode: Round, #[case] expected: &str) {
        let fraction = SEK.fraction_from_parts(-997, 3).unwrap();
        assert_eq!(
            fraction.round_to_overdraft(mode).unwrap(),
            SEK.overdraft(expected).unwrap()
        );
        assert_eq!(
            fraction.round_to_either(mode),
            Balance::Overdraft(SEK.overdraft(expected).unwrap())
        );
    }

    #[test]
    fn test_round_to_money_rejects_negative() {
        assert!(matches!(
            SEK.fraction(-1).round_to_money(Round::Down),
            Err(MoneyError::Parse(_))
        ));
        assert!(matches!(
            NOK.fraction(-100).round_to_money(Round::Down),
            Err(MoneyError::Parse(_))
        ));
    }

    #[test]
    fn test_round_to_overdraft_rejects_non_negative() {
        assert!(matches!(
            SEK.fraction(1).round_to_overdraft(Round::Down),
            Err(MoneyError::Parse(_))
        ));
        // -1/3 rounds up to zero, which is not a deficit
        assert!(matches!(
            SEK.fraction_from_parts(-1, 3)
                .unwrap()
                .round_to_overdraft(Round::Up),
            Err(MoneyError::Parse(_))
        ));
    }

    #[test]
    fn test_round_product() {
        let product = SEK
            .money("23.34")
            .unwrap()
            .mul_rational(&"23.89".parse().unwrap());
        assert_eq!(
            product.round_to_money(Round::Down).unwrap(),
            SEK.money("557.59").unwrap()
        );
    }

    #[test]
    fn test_round_serde_names() {
        assert_eq!(serde_json::to_string(&Round::HalfEven).unwrap(), "\"HALF_EVEN\"");
        assert_eq!(
            serde_json::from_str::<Round>("\"DOWN\"").unwrap(),
            Round::Down
        );
    }
}
