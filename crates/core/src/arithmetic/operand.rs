//! Tagged unions over the value kinds and the scalars they combine with.

use num_bigint::BigInt;
use rust_decimal::Decimal;
use strictmoney_shared::Rational;

use crate::currency::Currency;
use crate::values::{Balance, Money, Overdraft, SubunitFraction};

/// Any monetary value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Monetary {
    /// A non-negative amount.
    Money(Money),
    /// A deficit.
    Overdraft(Overdraft),
    /// An exact fraction of sub-units.
    Fraction(SubunitFraction),
}

impl Monetary {
    /// Kind label used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Money(_) => "Money",
            Self::Overdraft(_) => "Overdraft",
            Self::Fraction(_) => "SubunitFraction",
        }
    }

    /// The currency of the value.
    #[must_use]
    pub fn currency(&self) -> Currency {
        match self {
            Self::Money(money) => money.currency(),
            Self::Overdraft(overdraft) => overdraft.currency(),
            Self::Fraction(fraction) => fraction.currency(),
        }
    }

    /// Exact conversion to a fraction of sub-units.
    #[must_use]
    pub fn to_fraction(&self) -> SubunitFraction {
        match self {
            Self::Money(money) => money.to_fraction(),
            Self::Overdraft(overdraft) => overdraft.to_fraction(),
            Self::Fraction(fraction) => fraction.clone(),
        }
    }

    /// Returns true for a zero value.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Money(money) => money.is_zero(),
            Self::Overdraft(_) => false,
            Self::Fraction(fraction) => fraction.is_zero(),
        }
    }
}

impl From<Money> for Monetary {
    fn from(value: Money) -> Self {
        Self::Money(value)
    }
}

impl From<Overdraft> for Monetary {
    fn from(value: Overdraft) -> Self {
        Self::Overdraft(value)
    }
}

impl From<SubunitFraction> for Monetary {
    fn from(value: SubunitFraction) -> Self {
        Self::Fraction(value)
    }
}

impl From<Balance> for Monetary {
    fn from(value: Balance) -> Self {
        match value {
            Balance::Money(money) => Self::Money(money),
            Balance::Overdraft(overdraft) => Self::Overdraft(overdraft),
        }
    }
}

/// Right-hand side of a [`Monetary`] operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A non-negative amount.
    Money(Money),
    /// A deficit.
    Overdraft(Overdraft),
    /// An exact fraction of sub-units.
    Fraction(SubunitFraction),
    /// A whole-number scalar.
    Integer(BigInt),
    /// An exact rational scalar.
    Rational(Rational),
}

impl Operand {
    /// Kind label used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Money(_) => "Money",
            Self::Overdraft(_) => "Overdraft",
            Self::Fraction(_) => "SubunitFraction",
            Self::Integer(_) => "Integer",
            Self::Rational(_) => "Rational",
        }
    }
}

impl From<Monetary> for Operand {
    fn from(value: Monetary) -> Self {
        match value {
            Monetary::Money(money) => Self::Money(money),
            Monetary::Overdraft(overdraft) => Self::Overdraft(overdraft),
            Monetary::Fraction(fraction) => Self::Fraction(fraction),
        }
    }
}

impl From<&Monetary> for Operand {
    fn from(value: &Monetary) -> Self {
        value.clone().into()
    }
}

impl From<Money> for Operand {
    fn from(value: Money) -> Self {
        Self::Money(value)
    }
}

impl From<Overdraft> for Operand {
    fn from(value: Overdraft) -> Self {
        Self::Overdraft(value)
    }
}

impl From<SubunitFraction> for Operand {
    fn from(value: SubunitFraction) -> Self {
        Self::Fraction(value)
    }
}

impl From<Balance> for Operand {
    fn from(value: Balance) -> Self {
        Monetary::from(value).into()
    }
}

impl From<BigInt> for Operand {
    fn from(value: BigInt) -> Self {
        Self::Integer(value)
    }
}

impl From<Rational> for Operand {
    fn from(value: Rational) -> Self {
        Self::Rational(value)
    }
}

impl From<Decimal> for Operand {
    fn from(value: Decimal) -> Self {
        Self::Rational(Rational::from(value))
    }
}

macro_rules! operand_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Self::Integer(BigInt::from(value))
                }
            }
        )*
    };
}

operand_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
