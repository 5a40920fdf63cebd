//! Exact signed fractions of a sub-unit.

use std::hash::{Hash, Hasher};
use std::ops::Neg;
use std::sync::Arc;

use num_bigint::BigInt;
use once_cell::sync::Lazy;
use strictmoney_shared::{MoneyResult, Rational};

use super::{Money, Overdraft};
use crate::currency::Currency;
use crate::intern::{InstanceCache, Interned};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct FractionRepr {
    value: Rational,
    currency: Currency,
}

static FRACTION_CACHE: Lazy<InstanceCache<FractionRepr>> =
    Lazy::new(|| InstanceCache::new(FractionRepr::KIND));

impl Interned for FractionRepr {
    const KIND: &'static str = "SubunitFraction";

    fn cache() -> &'static InstanceCache<Self> {
        &FRACTION_CACHE
    }
}

/// An exact, possibly fractional and possibly negative number of sub-units.
///
/// Multiplication and division of monetary values produce fractions wherever
/// a whole sub-unit result cannot be guaranteed. The only way back to
/// [`Money`] or [`Overdraft`] is an explicit rounding step
/// ([`SubunitFraction::round_to_money`] and friends).
#[derive(Clone)]
pub struct SubunitFraction(Arc<FractionRepr>);

impl SubunitFraction {
    /// Builds a fraction of `value` sub-units. Never fails.
    #[must_use]
    pub fn new(value: impl Into<Rational>, currency: Currency) -> Self {
        Self(
            FractionRepr {
                value: value.into(),
                currency,
            }
            .intern(),
        )
    }

    /// Builds a fraction of `numerator / denominator` sub-units.
    ///
    /// # Errors
    ///
    /// Returns [`strictmoney_shared::MoneyError::DivisionByZero`] for a zero
    /// denominator.
    pub fn from_parts(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
        currency: Currency,
    ) -> MoneyResult<Self> {
        Ok(Self::new(Rational::new(numerator, denominator)?, currency))
    }

    /// The exact value of a `Money`.
    #[must_use]
    pub fn from_money(money: &Money) -> Self {
        Self::new(money.signed_subunits(), money.currency())
    }

    /// The exact (negative) value of an `Overdraft`.
    #[must_use]
    pub fn from_overdraft(overdraft: &Overdraft) -> Self {
        Self::new(overdraft.signed_subunits(), overdraft.currency())
    }

    /// Number of sub-units.
    #[must_use]
    pub fn value(&self) -> &Rational {
        &self.0.value
    }

    /// The currency of this fraction.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.0.currency
    }

    /// Returns true for a zero fraction.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.value.is_zero()
    }

    /// Returns true if both handles point at the same canonical instance.
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Number of canonical `SubunitFraction` instances alive in the process.
    #[must_use]
    pub fn instance_count() -> u64 {
        FractionRepr::cache().len()
    }

    fn combine(&self, currency: Currency, value: Rational) -> MoneyResult<Self> {
        self.currency().ensure_same(currency)?;
        Ok(Self::new(value, currency))
    }

    /// Sum of two fractions.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` across currencies.
    pub fn checked_add(&self, other: &Self) -> MoneyResult<Self> {
        self.combine(other.currency(), self.value() + other.value())
    }

    /// Difference of two fractions.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` across currencies.
    pub fn checked_sub(&self, other: &Self) -> MoneyResult<Self> {
        self.combine(other.currency(), self.value() - other.value())
    }

    /// Adds a `Money`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` across currencies.
    pub fn add_money(&self, other: &Money) -> MoneyResult<Self> {
        self.combine(
            other.currency(),
            self.value() + &Rational::from(other.signed_subunits()),
        )
    }

    /// Subtracts a `Money`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` across currencies.
    pub fn sub_money(&self, other: &Money) -> MoneyResult<Self> {
        self.combine(
            other.currency(),
            self.value() - &Rational::from(other.signed_subunits()),
        )
    }

    /// Adds an `Overdraft`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` across currencies.
    pub fn add_overdraft(&self, other: &Overdraft) -> MoneyResult<Self> {
        self.combine(
            other.currency(),
            self.value() + &Rational::from(other.signed_subunits()),
        )
    }

    /// Subtracts an `Overdraft`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` across currencies.
    pub fn sub_overdraft(&self, other: &Overdraft) -> MoneyResult<Self> {
        self.combine(
            other.currency(),
            self.value() - &Rational::from(other.signed_subunits()),
        )
    }

    /// Product with an integer.
    #[must_use]
    pub fn mul_integer(&self, factor: impl Into<BigInt>) -> Self {
        self.mul_rational(&Rational::from_integer(factor))
    }

    /// Product with a rational.
    #[must_use]
    pub fn mul_rational(&self, factor: &Rational) -> Self {
        Self::new(self.value() * factor, self.currency())
    }

    /// Quotient by an integer.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` for a zero divisor.
    pub fn div_integer(&self, divisor: impl Into<BigInt>) -> MoneyResult<Self> {
        self.div_rational(&Rational::from_integer(divisor))
    }

    /// Quotient by a rational.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` for a zero divisor.
    pub fn div_rational(&self, divisor: &Rational) -> MoneyResult<Self> {
        Ok(Self::new(self.value().checked_div(divisor)?, self.currency()))
    }

    /// Reflected quotient `dividend / self`.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` if this fraction is zero.
    pub fn rdiv_integer(&self, dividend: impl Into<BigInt>) -> MoneyResult<Self> {
        self.rdiv_rational(&Rational::from_integer(dividend))
    }

    /// Reflected quotient `dividend / self`.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` if this fraction is zero.
    pub fn rdiv_rational(&self, dividend: &Rational) -> MoneyResult<Self> {
        Ok(Self::new(dividend.checked_div(self.value())?, self.currency()))
    }

    /// The additive inverse.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::new(-self.value(), self.currency())
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::new(self.value().abs(), self.currency())
    }

    /// Orders two fractions of the same currency by exact value.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` across currencies.
    pub fn try_cmp(&self, other: &Self) -> MoneyResult<std::cmp::Ordering> {
        self.currency().ensure_same(other.currency())?;
        Ok(self.value().cmp(other.value()))
    }
}

impl PartialEq for SubunitFraction {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Eq for SubunitFraction {}

impl Hash for SubunitFraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl Neg for &SubunitFraction {
    type Output = SubunitFraction;

    fn neg(self) -> SubunitFraction {
        self.negate()
    }
}

impl Neg for SubunitFraction {
    type Output = SubunitFraction;

    fn neg(self) -> SubunitFraction {
        self.negate()
    }
}

impl From<&Money> for SubunitFraction {
    fn from(money: &Money) -> Self {
        Self::from_money(money)
    }
}

impl From<&Overdraft> for SubunitFraction {
    fn from(overdraft: &Overdraft) -> Self {
        Self::from_overdraft(overdraft)
    }
}
