//! Sign-dependent results of monetary arithmetic.

use std::ops::Neg;

use num_bigint::{BigInt, Sign};
use strictmoney_shared::{MoneyResult, Nat};

use super::{Money, Overdraft, SubunitFraction};
use crate::currency::Currency;

/// Either a non-negative `Money` or a strictly negative `Overdraft`.
///
/// Returned wherever the sign of a result depends on the operands, such as
/// `Money - Money`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Balance {
    /// Zero or a surplus.
    Money(Money),
    /// A deficit.
    Overdraft(Overdraft),
}

impl Balance {
    /// Builds the value of a signed sub-unit count: `Money` for `>= 0`,
    /// `Overdraft` otherwise.
    #[must_use]
    pub fn from_signed_subunits(subunits: BigInt, currency: Currency) -> Self {
        let (sign, magnitude) = subunits.into_parts();
        match sign {
            Sign::Minus => Self::Overdraft(Overdraft::from_nonzero(Nat::from(magnitude), currency)),
            Sign::NoSign | Sign::Plus => Self::Money(Money::from_nat(Nat::from(magnitude), currency)),
        }
    }

    /// The currency of the balance.
    #[must_use]
    pub fn currency(&self) -> Currency {
        match self {
            Self::Money(money) => money.currency(),
            Self::Overdraft(overdraft) => overdraft.currency(),
        }
    }

    /// Signed sub-unit count.
    #[must_use]
    pub fn signed_subunits(&self) -> BigInt {
        match self {
            Self::Money(money) => money.signed_subunits(),
            Self::Overdraft(overdraft) => overdraft.signed_subunits(),
        }
    }

    /// Returns true for zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Money(money) if money.is_zero())
    }

    /// Returns true for a `Money` result.
    #[must_use]
    pub const fn is_money(&self) -> bool {
        matches!(self, Self::Money(_))
    }

    /// Returns true for an `Overdraft` result.
    #[must_use]
    pub const fn is_overdraft(&self) -> bool {
        matches!(self, Self::Overdraft(_))
    }

    /// Borrows the `Money` variant.
    #[must_use]
    pub const fn as_money(&self) -> Option<&Money> {
        match self {
            Self::Money(money) => Some(money),
            Self::Overdraft(_) => None,
        }
    }

    /// Borrows the `Overdraft` variant.
    #[must_use]
    pub const fn as_overdraft(&self) -> Option<&Overdraft> {
        match self {
            Self::Money(_) => None,
            Self::Overdraft(overdraft) => Some(overdraft),
        }
    }

    /// Takes the `Money` variant.
    #[must_use]
    pub fn into_money(self) -> Option<Money> {
        match self {
            Self::Money(money) => Some(money),
            Self::Overdraft(_) => None,
        }
    }

    /// Takes the `Overdraft` variant.
    #[must_use]
    pub fn into_overdraft(self) -> Option<Overdraft> {
        match self {
            Self::Money(_) => None,
            Self::Overdraft(overdraft) => Some(overdraft),
        }
    }

    /// The additive inverse.
    #[must_use]
    pub fn negate(&self) -> Self {
        match self {
            Self::Money(money) => money.negate(),
            Self::Overdraft(overdraft) => Self::Money(overdraft.negate()),
        }
    }

    /// Exact conversion to a fraction of sub-units.
    #[must_use]
    pub fn to_fraction(&self) -> SubunitFraction {
        match self {
            Self::Money(money) => money.to_fraction(),
            Self::Overdraft(overdraft) => overdraft.to_fraction(),
        }
    }

    /// Sum of two balances.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` across currencies.
    pub fn checked_add(&self, other: &Self) -> MoneyResult<Self> {
        self.currency().ensure_same(other.currency())?;
        Ok(Self::from_signed_subunits(
            self.signed_subunits() + other.signed_subunits(),
            self.currency(),
        ))
    }

    /// Difference of two balances.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` across currencies.
    pub fn checked_sub(&self, other: &Self) -> MoneyResult<Self> {
        self.currency().ensure_same(other.currency())?;
        Ok(Self::from_signed_subunits(
            self.signed_subunits() - other.signed_subunits(),
            self.currency(),
        ))
    }
}

impl From<Money> for Balance {
    fn from(money: Money) -> Self {
        Self::Money(money)
    }
}

impl From<Overdraft> for Balance {
    fn from(overdraft: Overdraft) -> Self {
        Self::Overdraft(overdraft)
    }
}

impl Neg for &Balance {
    type Output = Balance;

    fn neg(self) -> Balance {
        self.negate()
    }
}

impl Neg for Balance {
    type Output = Balance;

    fn neg(self) -> Balance {
        self.negate()
    }
}
