//! Non-negative arbitrary-precision integer.

use std::fmt;

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::error::{MoneyError, MoneyResult};

/// A natural number (including zero) of unbounded size.
///
/// Money sub-unit counts and overdraft magnitudes are stored as `Nat`, so a
/// negative count is unrepresentable once constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Nat(BigUint);

impl Nat {
    /// Validates a signed integer as non-negative.
    pub fn new(value: impl Into<BigInt>) -> MoneyResult<Self> {
        value
            .into()
            .to_biguint()
            .map(Self)
            .ok_or_else(|| MoneyError::parse("Cannot parse from negative value"))
    }

    /// Zero.
    #[must_use]
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Returns true if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Borrows the underlying integer.
    #[must_use]
    pub const fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Returns the underlying integer.
    #[must_use]
    pub fn into_inner(self) -> BigUint {
        self.0
    }

    /// Returns the value as a signed integer.
    #[must_use]
    pub fn to_bigint(&self) -> BigInt {
        BigInt::from(self.0.clone())
    }
}

impl From<BigUint> for Nat {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

macro_rules! nat_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Nat {
                fn from(value: $ty) -> Self {
                    Self(BigUint::from(value))
                }
            }
        )*
    };
}

nat_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl fmt::Display for Nat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
