//! Strictly positive deficits.

use std::hash::{Hash, Hasher};
use std::ops::Neg;
use std::sync::Arc;

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use strictmoney_shared::{MoneyError, MoneyResult, Nat, Rational};

use super::{Balance, Money, SubunitFraction};
use crate::arithmetic::division::fair_shares;
use crate::currency::{Currency, MainUnitValue};
use crate::intern::{InstanceCache, Interned};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct OverdraftRepr {
    subunits: Nat,
    currency: Currency,
}

static OVERDRAFT_CACHE: Lazy<InstanceCache<OverdraftRepr>> =
    Lazy::new(|| InstanceCache::new(OverdraftRepr::KIND));

impl Interned for OverdraftRepr {
    const KIND: &'static str = "Overdraft";

    fn cache() -> &'static InstanceCache<Self> {
        &OVERDRAFT_CACHE
    }
}

/// A deficit in a currency.
///
/// The magnitude is stored as a positive sub-unit count; an overdraft of zero
/// does not exist, the zero [`Money`] takes its place. Within one currency
/// every overdraft ranks below every `Money`.
#[derive(Clone)]
pub struct Overdraft(Arc<OverdraftRepr>);

impl Overdraft {
    /// Builds a deficit from a main-unit magnitude such as `"12.50"`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Parse`] for invalid input and
    /// [`MoneyError::InvalidOverdraftValue`] for a zero magnitude.
    pub fn new(value: impl Into<MainUnitValue>, currency: Currency) -> MoneyResult<Self> {
        let subunits = currency.normalize_to_subunits(value)?;
        Self::from_nat(subunits, currency)
    }

    /// Builds a deficit from a sub-unit magnitude.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidOverdraftValue`] for zero.
    pub fn from_subunit(subunits: impl Into<Nat>, currency: Currency) -> MoneyResult<Self> {
        Self::from_nat(subunits.into(), currency)
    }

    fn from_nat(subunits: Nat, currency: Currency) -> MoneyResult<Self> {
        if subunits.is_zero() {
            return Err(MoneyError::InvalidOverdraftValue);
        }
        Ok(Self::from_nonzero(subunits, currency))
    }

    /// Callers guarantee `subunits` is nonzero.
    pub(crate) fn from_nonzero(subunits: Nat, currency: Currency) -> Self {
        Self(OverdraftRepr { subunits, currency }.intern())
    }

    /// Magnitude of the deficit in sub-units; always positive.
    #[must_use]
    pub fn subunits(&self) -> &Nat {
        &self.0.subunits
    }

    /// The currency of this deficit.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.0.currency
    }

    /// The deficit as a negative sub-unit count.
    #[must_use]
    pub fn signed_subunits(&self) -> BigInt {
        -self.0.subunits.to_bigint()
    }

    /// Returns true if both handles point at the same canonical instance.
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Number of canonical `Overdraft` instances alive in the process.
    #[must_use]
    pub fn instance_count() -> u64 {
        OverdraftRepr::cache().len()
    }

    /// Exact signed main-unit amount as a `Decimal`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::OutOfRange`] if the amount does not fit.
    pub fn to_decimal(&self) -> MoneyResult<Decimal> {
        let out_of_range = || MoneyError::OutOfRange(format!("{self} does not fit a Decimal"));
        let mantissa = self.signed_subunits().to_i128().ok_or_else(out_of_range)?;
        Decimal::try_from_i128_with_scale(mantissa, self.currency().decimal_places())
            .map_err(|_| out_of_range())
    }

    /// Exact conversion to a negative fraction of sub-units.
    #[must_use]
    pub fn to_fraction(&self) -> SubunitFraction {
        SubunitFraction::from_overdraft(self)
    }

    /// Sum of two deficits.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] across currencies.
    pub fn checked_add(&self, other: &Self) -> MoneyResult<Self> {
        self.currency().ensure_same(other.currency())?;
        let sum = self.subunits().as_biguint() + other.subunits().as_biguint();
        Ok(Self::from_nonzero(Nat::from(sum), self.currency()))
    }

    /// Settles the deficit with `other`, yielding whatever remains.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] across currencies.
    pub fn add_money(&self, other: &Money) -> MoneyResult<Balance> {
        other.add_overdraft(self)
    }

    /// Deepens the deficit by `other`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] across currencies.
    pub fn sub_money(&self, other: &Money) -> MoneyResult<Self> {
        self.currency().ensure_same(other.currency())?;
        let sum = self.subunits().as_biguint() + other.subunits().as_biguint();
        Ok(Self::from_nonzero(Nat::from(sum), self.currency()))
    }

    /// Difference of two deficits.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] across currencies.
    pub fn checked_sub(&self, other: &Self) -> MoneyResult<Balance> {
        self.currency().ensure_same(other.currency())?;
        Ok(Balance::from_signed_subunits(
            self.signed_subunits() - other.signed_subunits(),
            self.currency(),
        ))
    }

    /// Adds a fraction of sub-units.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] across currencies.
    pub fn add_fraction(&self, other: &SubunitFraction) -> MoneyResult<SubunitFraction> {
        other.add_overdraft(self)
    }

    /// Subtracts a fraction of sub-units.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] across currencies.
    pub fn sub_fraction(&self, other: &SubunitFraction) -> MoneyResult<SubunitFraction> {
        self.to_fraction().checked_sub(other)
    }

    /// The additive inverse: `Money` of the same magnitude.
    #[must_use]
    pub fn negate(&self) -> Money {
        Money::from_nat(self.subunits().clone(), self.currency())
    }

    /// Magnitude of the deficit as `Money`.
    #[must_use]
    pub fn abs(&self) -> Money {
        self.negate()
    }

    /// Multiplies by an integer; a negative factor yields `Money`.
    #[must_use]
    pub fn mul_integer(&self, factor: impl Into<BigInt>) -> Balance {
        Balance::from_signed_subunits(self.signed_subunits() * factor.into(), self.currency())
    }

    /// Multiplies by an exact rational, keeping every fractional sub-unit.
    #[must_use]
    pub fn mul_rational(&self, factor: &Rational) -> SubunitFraction {
        self.to_fraction().mul_rational(factor)
    }

    /// Splits the deficit into `parts` shares that differ by at most one
    /// sub-unit, largest deficit first. A zero share is zero `Money`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::DivisionByZero`] if `parts` is zero.
    pub fn split(&self, parts: usize) -> MoneyResult<Vec<Balance>> {
        let currency = self.currency();
        Ok(fair_shares(self.subunits().as_biguint(), parts)?
            .into_iter()
            .map(|share| {
                let share = Nat::from(share);
                if share.is_zero() {
                    Balance::Money(Money::from_nat(share, currency))
                } else {
                    Balance::Overdraft(Self::from_nonzero(share, currency))
                }
            })
            .collect())
    }

    /// Exact quotient by an integer, as a fraction of sub-units.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::DivisionByZero`] for a zero divisor.
    pub fn ratio(&self, divisor: impl Into<BigInt>) -> MoneyResult<SubunitFraction> {
        self.ratio_rational(&Rational::from_integer(divisor))
    }

    /// Exact quotient by a rational, as a fraction of sub-units.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::DivisionByZero`] for a zero divisor.
    pub fn ratio_rational(&self, divisor: &Rational) -> MoneyResult<SubunitFraction> {
        self.to_fraction().div_rational(divisor)
    }

    /// Orders two deficits of the same currency; the larger deficit is lower.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] across currencies.
    pub fn try_cmp(&self, other: &Self) -> MoneyResult<std::cmp::Ordering> {
        self.currency().ensure_same(other.currency())?;
        Ok(other.subunits().cmp(self.subunits()))
    }
}

impl PartialEq for Overdraft {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Eq for Overdraft {}

impl Hash for Overdraft {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl Neg for &Overdraft {
    type Output = Money;

    fn neg(self) -> Money {
        self.negate()
    }
}

impl Neg for Overdraft {
    type Output = Money;

    fn neg(self) -> Money {
        self.negate()
    }
}
