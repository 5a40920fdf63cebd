//! Exact arbitrary-precision rational numbers.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Every operation on [`Rational`] is exact; division is the only fallible one.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use rust_decimal::Decimal;

use super::nat::Nat;
use crate::error::{MoneyError, MoneyResult};

/// Largest decimal exponent accepted when parsing text.
const MAX_DECIMAL_EXPONENT: i64 = 4_096;

/// A rational number kept in lowest terms with a positive denominator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rational(BigRational);

impl Rational {
    /// Builds `numerator / denominator`, normalised to lowest terms.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> MoneyResult<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self(BigRational::new(numerator.into(), denominator)))
    }

    /// Builds a whole number.
    #[must_use]
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self(BigRational::from_integer(value.into()))
    }

    /// Zero.
    #[must_use]
    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    /// One.
    #[must_use]
    pub fn one() -> Self {
        Self(BigRational::one())
    }

    /// Numerator in lowest terms; carries the sign.
    #[must_use]
    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    /// Denominator in lowest terms; always positive.
    #[must_use]
    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    /// Returns true if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the value is strictly below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Returns true if the value is strictly above zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    /// Returns true if the denominator is one.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    /// Returns the value as an integer when it has no fractional part.
    #[must_use]
    pub fn to_integer(&self) -> Option<BigInt> {
        self.is_integer().then(|| self.0.numer().clone())
    }

    /// Largest integer less than or equal to the value.
    #[must_use]
    pub fn floor(&self) -> BigInt {
        self.0.numer().div_floor(self.0.denom())
    }

    /// Smallest integer greater than or equal to the value.
    #[must_use]
    pub fn ceil(&self) -> BigInt {
        -((-self.0.numer()).div_floor(self.0.denom()))
    }

    /// Distance from the floor, always in `[0, 1)`.
    #[must_use]
    pub fn fract(&self) -> Self {
        Self(&self.0 - BigRational::from_integer(self.floor()))
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Exact division.
    pub fn checked_div(&self, divisor: &Self) -> MoneyResult<Self> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self(&self.0 / &divisor.0))
    }

    /// Borrows the underlying ratio.
    #[must_use]
    pub const fn as_big_rational(&self) -> &BigRational {
        &self.0
    }

    /// Returns the underlying ratio.
    #[must_use]
    pub fn into_inner(self) -> BigRational {
        self.0
    }

    /// Parses decimal notation (`"12.50"`, `"-0.001"`, `"1e3"`, `".5"`) exactly.
    ///
    /// NaN and infinity spellings are rejected with a dedicated message so
    /// callers can tell them apart from garbage input.
    pub fn parse_decimal(text: &str) -> MoneyResult<Self> {
        let trimmed = text.trim();
        let (negative, body) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let lowered = body.to_ascii_lowercase();
        if matches!(lowered.as_str(), "nan" | "snan") {
            return Err(MoneyError::parse("Cannot parse from NaN"));
        }
        if matches!(lowered.as_str(), "inf" | "infinity") {
            return Err(MoneyError::parse("Cannot parse from non-finite value"));
        }

        let invalid = || MoneyError::parse(format!("Invalid decimal literal: {text:?}"));

        let (mantissa, exponent) = match body.find(['e', 'E']) {
            Some(index) => {
                let exponent = body[index + 1..].parse::<i64>().map_err(|_| invalid())?;
                (&body[..index], exponent)
            }
            None => (body, 0),
        };
        let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let digits = format!("{whole}{fraction}");
        let coefficient = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
        let fraction_len = i64::try_from(fraction.len()).map_err(|_| invalid())?;
        let scale = exponent.checked_sub(fraction_len).ok_or_else(invalid)?;
        if scale.unsigned_abs() > MAX_DECIMAL_EXPONENT.unsigned_abs() {
            return Err(MoneyError::parse(format!(
                "Decimal exponent out of range: {text:?}"
            )));
        }

        let power = power_of_ten(scale.unsigned_abs());
        let magnitude = if scale >= 0 {
            BigRational::from_integer(coefficient * power)
        } else {
            BigRational::new(coefficient, power)
        };
        Ok(Self(if negative { -magnitude } else { magnitude }))
    }
}

fn power_of_ten(exponent: u64) -> BigInt {
    // Bounded by MAX_DECIMAL_EXPONENT at every call site.
    let exponent = u32::try_from(exponent).unwrap_or(u32::MAX);
    BigInt::from(10u8).pow(exponent)
}

impl FromStr for Rational {
    type Err = MoneyError;

    /// Accepts either `"numerator/denominator"` or decimal notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((numerator, denominator)) => {
                let parse = |part: &str| {
                    BigInt::from_str(part.trim())
                        .map_err(|_| MoneyError::parse(format!("Invalid fraction literal: {s:?}")))
                };
                Self::new(parse(numerator)?, parse(denominator)?)
            }
            None => Self::parse_decimal(s),
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.0.numer())
        } else {
            write!(f, "{}/{}", self.0.numer(), self.0.denom())
        }
    }
}

impl From<BigRational> for Rational {
    fn from(value: BigRational) -> Self {
        Self(value)
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<BigUint> for Rational {
    fn from(value: BigUint) -> Self {
        Self::from_integer(BigInt::from(value))
    }
}

impl From<&Nat> for Rational {
    fn from(value: &Nat) -> Self {
        Self::from_integer(value.to_bigint())
    }
}

impl From<Decimal> for Rational {
    fn from(value: Decimal) -> Self {
        let denominator = power_of_ten(u64::from(value.scale()));
        Self(BigRational::new(BigInt::from(value.mantissa()), denominator))
    }
}

macro_rules! rational_from_primitive {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Rational {
                fn from(value: $ty) -> Self {
                    Self::from_integer(BigInt::from(value))
                }
            }
        )*
    };
}

rational_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                Rational(self.0.$method(rhs.0))
            }
        }

        impl $trait<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                Rational(self.0.$method(&rhs.0))
            }
        }

        impl $trait<&Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                Rational((&self.0).$method(&rhs.0))
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-&self.0)
    }
}
