//! Currency definition and the value constructors hanging off it.

use std::fmt;

use num_bigint::{BigInt, BigUint};
use rust_decimal::Decimal;
use strictmoney_shared::{MoneyError, MoneyResult, Nat, Rational};
use ustr::Ustr;

use super::parse::normalize_to_subunits;
use crate::values::{Money, Overdraft, SubunitFraction};

/// A currency: a code plus the number of sub-units in one main unit.
///
/// Currencies are small `Copy` values. Two currencies are equal when both the
/// code and the granularity match.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency {
    code: Ustr,
    subunit: u64,
    decimal_places: u32,
}

impl Currency {
    /// Defines a currency.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Parse`] for an empty code or one containing
    /// whitespace, and [`MoneyError::InvalidSubunit`] unless `subunit` is a
    /// power of ten (`1`, `10`, `100`, ...).
    ///
    /// # Example
    ///
    /// ```
    /// use strictmoney_core::Currency;
    ///
    /// let sek = Currency::new("SEK", 100).unwrap();
    /// assert_eq!(sek.decimal_places(), 2);
    /// assert!(Currency::new("XXX", 3).is_err());
    /// ```
    pub fn new(code: &str, subunit: u64) -> MoneyResult<Self> {
        if code.is_empty() || code.chars().any(char::is_whitespace) {
            return Err(MoneyError::parse(format!("Invalid currency code {code:?}")));
        }
        let decimal_places = power_of_ten_exponent(subunit)
            .ok_or(MoneyError::InvalidSubunit { subunit })?;
        Ok(Self {
            code: Ustr::from(code),
            subunit,
            decimal_places,
        })
    }

    /// Builds a catalog currency whose granularity is known to be a nonzero
    /// power of ten.
    pub(super) fn catalog_entry(code: &str, subunit: u64) -> Self {
        Self {
            code: Ustr::from(code),
            subunit,
            decimal_places: subunit.ilog10(),
        }
    }

    /// The currency code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.code.as_str()
    }

    /// Sub-units per main unit.
    #[must_use]
    pub const fn subunit(&self) -> u64 {
        self.subunit
    }

    /// Number of fractional digits in a main-unit amount.
    #[must_use]
    pub const fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Converts a main-unit value into an exact count of sub-units.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Parse`] for unparseable or negative input, or
    /// when the value has more precision than the currency's granularity.
    pub fn normalize_to_subunits(&self, value: impl Into<MainUnitValue>) -> MoneyResult<Nat> {
        normalize_to_subunits(*self, value.into())
    }

    /// Builds a [`Money`] from a main-unit value.
    ///
    /// # Errors
    ///
    /// Same as [`Currency::normalize_to_subunits`].
    pub fn money(&self, value: impl Into<MainUnitValue>) -> MoneyResult<Money> {
        Money::new(value, *self)
    }

    /// Builds a [`Money`] from a count of sub-units.
    #[must_use]
    pub fn from_subunit(&self, subunits: impl Into<Nat>) -> Money {
        Money::from_subunit(subunits, *self)
    }

    /// Zero in this currency.
    #[must_use]
    pub fn zero(&self) -> Money {
        Money::from_subunit(0u8, *self)
    }

    /// The smallest positive amount in this currency.
    #[must_use]
    pub fn one_subunit(&self) -> Money {
        Money::from_subunit(1u8, *self)
    }

    /// Builds an [`Overdraft`] from a main-unit value.
    ///
    /// # Errors
    ///
    /// Same as [`Currency::normalize_to_subunits`], plus
    /// [`MoneyError::InvalidOverdraftValue`] for zero.
    pub fn overdraft(&self, value: impl Into<MainUnitValue>) -> MoneyResult<Overdraft> {
        Overdraft::new(value, *self)
    }

    /// Builds an [`Overdraft`] from a count of sub-units.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidOverdraftValue`] for zero.
    pub fn overdraft_from_subunit(&self, subunits: impl Into<Nat>) -> MoneyResult<Overdraft> {
        Overdraft::from_subunit(subunits, *self)
    }

    /// Builds a [`SubunitFraction`] from an exact number of sub-units.
    #[must_use]
    pub fn fraction(&self, value: impl Into<Rational>) -> SubunitFraction {
        SubunitFraction::new(value, *self)
    }

    /// Builds a [`SubunitFraction`] of `numerator / denominator` sub-units.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::DivisionByZero`] for a zero denominator.
    pub fn fraction_from_parts(
        &self,
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> MoneyResult<SubunitFraction> {
        SubunitFraction::from_parts(numerator, denominator, *self)
    }

    /// Fails with [`MoneyError::CurrencyMismatch`] unless both currencies match.
    pub(crate) fn ensure_same(self, other: Self) -> MoneyResult<()> {
        if self == other {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                left: self.code().to_string(),
                right: other.code().to_string(),
            })
        }
    }
}

fn power_of_ten_exponent(mut value: u64) -> Option<u32> {
    if value == 0 {
        return None;
    }
    let mut exponent = 0;
    while value % 10 == 0 {
        value /= 10;
        exponent += 1;
    }
    (value == 1).then_some(exponent)
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Currency")
            .field("code", &self.code())
            .field("subunit", &self.subunit)
            .finish()
    }
}

/// A main-unit amount as accepted by value constructors.
///
/// Floating-point numbers have no conversion into this type and are therefore
/// rejected at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainUnitValue {
    /// A whole number of main units.
    Integer(BigInt),
    /// Decimal text such as `"12.50"`.
    Text(String),
    /// A fixed-point decimal.
    Decimal(Decimal),
}

macro_rules! main_unit_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for MainUnitValue {
                fn from(value: $ty) -> Self {
                    Self::Integer(BigInt::from(value))
                }
            }
        )*
    };
}

main_unit_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for MainUnitValue {
    fn from(value: BigInt) -> Self {
        Self::Integer(value)
    }
}

impl From<BigUint> for MainUnitValue {
    fn from(value: BigUint) -> Self {
        Self::Integer(BigInt::from(value))
    }
}

impl From<&str> for MainUnitValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for MainUnitValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Decimal> for MainUnitValue {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 0)]
    #[case(10, 1)]
    #[case(100, 2)]
    #[case(1000, 3)]
    #[case(10_000, 4)]
    #[case(10_000_000_000_000_000_000, 19)]
    fn test_valid_subunits(#[case] subunit: u64, #[case] places: u32) {
        let currency = Currency::new("XTS", subunit).unwrap();
        assert_eq!(currency.subunit(), subunit);
        assert_eq!(currency.decimal_places(), places);
    }

    #[rstest]
    #[case(0)]
    #[case(2)]
    #[case(3)]
    #[case(20)]
    #[case(101)]
    #[case(1001)]
    fn test_invalid_subunits(#[case] subunit: u64) {
        assert_eq!(
            Currency::new("XTS", subunit),
            Err(MoneyError::InvalidSubunit { subunit })
        );
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("SE K")]
    #[case(" SEK")]
    #[case("SEK\n")]
    fn test_invalid_codes(#[case] code: &str) {
        assert_eq!(
            Currency::new(code, 100),
            Err(MoneyError::Parse(format!("Invalid currency code {code:?}")))
        );
    }

    #[test]
    fn test_equality_by_code_and_subunit() {
        let a = Currency::new("XTS", 100).unwrap();
        let b = Currency::new("XTS", 100).unwrap();
        let c = Currency::new("XTS", 1000).unwrap();
        let d = Currency::new("XTT", 100).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_display_and_debug() {
        let currency = Currency::new("SEK", 100).unwrap();
        assert_eq!(currency.to_string(), "SEK");
        assert_eq!(
            format!("{currency:?}"),
            "Currency { code: \"SEK\", subunit: 100 }"
        );
    }

    #[test]
    fn test_ensure_same() {
        let sek = Currency::new("SEK", 100).unwrap();
        let nok = Currency::new("NOK", 100).unwrap();
        assert!(sek.ensure_same(sek).is_ok());
        assert_eq!(
            sek.ensure_same(nok),
            Err(MoneyError::CurrencyMismatch {
                left: "SEK".into(),
                right: "NOK".into(),
            })
        );
    }

    #[test]
    fn test_constructors_delegate() {
        let sek = Currency::new("SEK", 100).unwrap();
        assert_eq!(sek.money("1.50").unwrap(), sek.from_subunit(150u32));
        assert!(sek.zero().is_zero());
        assert_eq!(sek.one_subunit().subunits(), &Nat::from(1u8));
        assert_eq!(
            sek.overdraft(2).unwrap(),
            sek.overdraft_from_subunit(200u32).unwrap()
        );
        assert_eq!(
            sek.fraction_from_parts(1, 3).unwrap(),
            sek.fraction(Rational::new(1, 3).unwrap())
        );
        assert_eq!(
            sek.fraction_from_parts(1, 0),
            Err(MoneyError::DivisionByZero)
        );
    }
}
