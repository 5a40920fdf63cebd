//! Non-negative monetary amounts.

use std::hash::{Hash, Hasher};
use std::ops::Neg;
use std::sync::Arc;

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use strictmoney_shared::{MoneyError, MoneyResult, Nat, Rational};

use super::{Balance, Overdraft, SubunitFraction};
use crate::arithmetic::division::fair_shares;
use crate::currency::{Currency, MainUnitValue};
use crate::intern::{InstanceCache, Interned};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct MoneyRepr {
    subunits: Nat,
    currency: Currency,
}

static MONEY_CACHE: Lazy<InstanceCache<MoneyRepr>> =
    Lazy::new(|| InstanceCache::new(MoneyRepr::KIND));

impl Interned for MoneyRepr {
    const KIND: &'static str = "Money";

    fn cache() -> &'static InstanceCache<Self> {
        &MONEY_CACHE
    }
}

/// A non-negative amount of a currency, stored as a whole number of
/// sub-units.
///
/// Instances are canonical: two equal amounts are always the same allocation
/// (see [`Money::is_identical`]).
///
/// # Example
///
/// ```
/// use strictmoney_core::currency::catalog::SEK;
///
/// let price = SEK.money("523.12").unwrap();
/// let parts = price.split(3).unwrap();
/// assert_eq!(parts[0], SEK.money("174.38").unwrap());
/// assert_eq!(parts[2], SEK.money("174.37").unwrap());
/// ```
#[derive(Clone)]
pub struct Money(Arc<MoneyRepr>);

impl Money {
    /// Builds a value from a main-unit amount such as `"12.50"`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Parse`] for unparseable or negative input, or
    /// input more precise than one sub-unit.
    pub fn new(value: impl Into<MainUnitValue>, currency: Currency) -> MoneyResult<Self> {
        let subunits = currency.normalize_to_subunits(value)?;
        Ok(Self::from_nat(subunits, currency))
    }

    /// Builds a value from a count of sub-units. Always exact.
    #[must_use]
    pub fn from_subunit(subunits: impl Into<Nat>, currency: Currency) -> Self {
        Self::from_nat(subunits.into(), currency)
    }

    /// Builds a value from a main-unit decimal, discarding anything finer than
    /// one sub-unit.
    ///
    /// Total over non-negative input: every `Decimal >= 0` yields a value,
    /// whatever its precision or magnitude.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Parse`] if `main_units` is negative; this is the
    /// only failure.
    pub fn floored(main_units: Decimal, currency: Currency) -> MoneyResult<Self> {
        let subunits = Rational::from(main_units) * Rational::from(currency.subunit());
        Ok(Self::from_nat(Nat::new(subunits.floor())?, currency))
    }

    pub(crate) fn from_nat(subunits: Nat, currency: Currency) -> Self {
        Self(MoneyRepr { subunits, currency }.intern())
    }

    /// Count of sub-units.
    #[must_use]
    pub fn subunits(&self) -> &Nat {
        &self.0.subunits
    }

    /// The currency of this amount.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.0.currency
    }

    /// Sub-unit count as a signed integer.
    #[must_use]
    pub fn signed_subunits(&self) -> BigInt {
        self.0.subunits.to_bigint()
    }

    /// Returns true for the zero amount.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.subunits.is_zero()
    }

    /// Returns true if both handles point at the same canonical instance.
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Number of canonical `Money` instances alive in the process.
    #[must_use]
    pub fn instance_count() -> u64 {
        MoneyRepr::cache().len()
    }

    /// Exact main-unit amount as a `Decimal`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::OutOfRange`] if the amount does not fit.
    pub fn to_decimal(&self) -> MoneyResult<Decimal> {
        let mantissa = self
            .subunits()
            .as_biguint()
            .to_i128()
            .ok_or_else(|| MoneyError::OutOfRange(format!("{self} does not fit a Decimal")))?;
        Decimal::try_from_i128_with_scale(mantissa, self.currency().decimal_places())
            .map_err(|_| MoneyError::OutOfRange(format!("{self} does not fit a Decimal")))
    }

    /// Exact conversion to a fraction of sub-units.
    #[must_use]
    pub fn to_fraction(&self) -> SubunitFraction {
        SubunitFraction::from_money(self)
    }

    /// Sum of two amounts.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] across currencies.
    pub fn checked_add(&self, other: &Self) -> MoneyResult<Self> {
        self.currency().ensure_same(other.currency())?;
        let sum = self.subunits().as_biguint() + other.subunits().as_biguint();
        Ok(Self::from_nat(Nat::from(sum), self.currency()))
    }

    /// Difference of two amounts; an overdraft when `other` is larger.
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

    /// Adds an overdraft, settling as much of it as this amount covers.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] across currencies.
    pub fn add_overdraft(&self, other: &Overdraft) -> MoneyResult<Balance> {
        self.currency().ensure_same(other.currency())?;
        Ok(Balance::from_signed_subunits(
            self.signed_subunits() + other.signed_subunits(),
            self.currency(),
        ))
    }

    /// Subtracts an overdraft, which always increases the amount.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] across currencies.
    pub fn sub_overdraft(&self, other: &Overdraft) -> MoneyResult<Self> {
        self.currency().ensure_same(other.currency())?;
        let sum = self.subunits().as_biguint() + other.subunits().as_biguint();
        Ok(Self::from_nat(Nat::from(sum), self.currency()))
    }

    /// Adds a fraction of sub-units.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] across currencies.
    pub fn add_fraction(&self, other: &SubunitFraction) -> MoneyResult<SubunitFraction> {
        other.add_money(self)
    }

    /// Subtracts a fraction of sub-units.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] across currencies.
    pub fn sub_fraction(&self, other: &SubunitFraction) -> MoneyResult<SubunitFraction> {
        self.to_fraction().checked_sub(other)
    }

    /// The additive inverse: an overdraft of the same magnitude, or zero.
    #[must_use]
    pub fn negate(&self) -> Balance {
        Balance::from_signed_subunits(-self.signed_subunits(), self.currency())
    }

    /// Absolute value, which is the amount itself.
    #[must_use]
    pub fn abs(&self) -> Self {
        self.clone()
    }

    /// Multiplies by an integer; a negative factor yields an overdraft.
    #[must_use]
    pub fn mul_integer(&self, factor: impl Into<BigInt>) -> Balance {
        Balance::from_signed_subunits(self.signed_subunits() * factor.into(), self.currency())
    }

    /// Multiplies by an exact rational, keeping every fractional sub-unit.
    #[must_use]
    pub fn mul_rational(&self, factor: &Rational) -> SubunitFraction {
        self.to_fraction().mul_rational(factor)
    }

    /// Splits into `parts` amounts that differ by at most one sub-unit and sum
    /// to exactly `self`, largest first.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::DivisionByZero`] if `parts` is zero.
    pub fn split(&self, parts: usize) -> MoneyResult<Vec<Self>> {
        let currency = self.currency();
        Ok(fair_shares(self.subunits().as_biguint(), parts)?
            .into_iter()
            .map(|share| Self::from_nat(Nat::from(share), currency))
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

    /// Orders two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] across currencies.
    pub fn try_cmp(&self, other: &Self) -> MoneyResult<std::cmp::Ordering> {
        self.currency().ensure_same(other.currency())?;
        Ok(self.subunits().cmp(other.subunits()))
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Eq for Money {}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl Neg for &Money {
    type Output = Balance;

    fn neg(self) -> Balance {
        self.negate()
    }
}

impl Neg for Money {
    type Output = Balance;

    fn neg(self) -> Balance {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::catalog::{JPY, NOK, SEK};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn sek(value: &str) -> Money {
        SEK.money(value).unwrap()
    }

    #[test]
    fn test_equal_values_are_identical() {
        let a = sek("1.01");
        let b = sek("1.010");
        let c = Money::from_subunit(101u32, *SEK);
        assert!(a.is_identical(&b));
        assert!(a.is_identical(&c));
        assert!(!a.is_identical(&sek("1.02")));
    }

    #[test]
    fn test_same_amount_different_currency_is_distinct() {
        let a = Money::from_subunit(100u32, *SEK);
        let b = Money::from_subunit(100u32, *NOK);
        assert_ne!(a, b);
        assert!(!a.is_identical(&b));
    }

    #[test]
    fn test_instance_count_grows_with_new_values() {
        let before = Money::instance_count();
        let _ = Money::from_subunit(918_273_645_019u64, *SEK);
        assert!(Money::instance_count() > before);
    }

    #[test]
    fn test_new_rejects_precision_loss() {
        assert!(matches!(SEK.money("0.001"), Err(MoneyError::Parse(_))));
        assert!(matches!(JPY.money("0.5"), Err(MoneyError::Parse(_))));
    }

    #[rstest]
    #[case(dec!(1.239), 123u32)]
    #[case(dec!(0.009), 0)]
    #[case(dec!(12), 1200)]
    fn test_floored(#[case] value: Decimal, #[case] subunits: u32) {
        assert_eq!(
            Money::floored(value, *SEK).unwrap(),
            Money::from_subunit(subunits, *SEK)
        );
    }

    #[test]
    fn test_floored_is_total_for_non_negative_input() {
        let tiny = Decimal::new(1, 28);
        assert!(Money::floored(tiny, *SEK).unwrap().is_zero());
        assert!(Money::floored(Decimal::ZERO, *JPY).unwrap().is_zero());

        assert_eq!(
            Money::floored(Decimal::MAX, *SEK).unwrap(),
            Money::from_subunit(79_228_162_514_264_337_593_543_950_335u128 * 100, *SEK)
        );
    }

    #[test]
    fn test_floored_rejects_negative() {
        assert!(matches!(
            Money::floored(dec!(-0.01), *SEK),
            Err(MoneyError::Parse(_))
        ));
    }

    #[test]
    fn test_add() {
        assert_eq!(sek("0.75").checked_add(&sek("0.50")).unwrap(), sek("1.25"));
    }

    #[test]
    fn test_sub_goes_negative() {
        let money = Money::from_subunit(100u32, *SEK);
        let more = Money::from_subunit(101u32, *SEK);
        assert_eq!(
            money.checked_sub(&more).unwrap(),
            Balance::Overdraft(SEK.overdraft_from_subunit(1u32).unwrap())
        );
        assert_eq!(
            more.checked_sub(&money).unwrap(),
            Balance::Money(SEK.one_subunit())
        );
    }

    #[test]
    fn test_cross_currency_fails() {
        let err = sek("1").checked_add(&NOK.money(1).unwrap()).unwrap_err();
        assert!(err.is_type_error());
        assert!(sek("1").checked_sub(&NOK.money(1).unwrap()).is_err());
        assert!(sek("1").try_cmp(&NOK.money(1).unwrap()).is_err());
    }

    #[test]
    fn test_overdraft_interaction() {
        let thousand = sek("1000");
        let six_hundred = sek("600");
        assert_eq!(
            thousand
                .add_overdraft(&SEK.overdraft(600).unwrap())
                .unwrap(),
            Balance::Money(sek("400"))
        );
        assert_eq!(
            six_hundred
                .add_overdraft(&SEK.overdraft(1000).unwrap())
                .unwrap(),
            Balance::Overdraft(SEK.overdraft(400).unwrap())
        );
        assert_eq!(
            thousand.sub_overdraft(&SEK.overdraft(600).unwrap()).unwrap(),
            sek("1600")
        );
        assert_eq!(
            six_hundred
                .sub_overdraft(&SEK.overdraft(1000).unwrap())
                .unwrap(),
            sek("1600")
        );
    }

    #[test]
    fn test_negation() {
        assert_eq!(-sek("12.34"), Balance::Overdraft(SEK.overdraft("12.34").unwrap()));
        assert_eq!(-SEK.zero(), Balance::Money(SEK.zero()));
        assert_eq!(sek("5").abs(), sek("5"));
    }

    #[test]
    fn test_mul_integer() {
        assert_eq!(sek("12.34").mul_integer(2), Balance::Money(sek("24.68")));
        assert_eq!(
            sek("12.34").mul_integer(-2),
            Balance::Overdraft(SEK.overdraft("24.68").unwrap())
        );
        assert_eq!(sek("12.34").mul_integer(0), Balance::Money(SEK.zero()));
    }

    #[test]
    fn test_mul_rational() {
        let product = sek("10").mul_rational(&Rational::from(dec!(0.5)));
        assert_eq!(product, SEK.fraction(500));

        let product = sek("23.34").mul_rational(&Rational::from(dec!(23.89)));
        assert_eq!(product, SEK.fraction_from_parts(2_787_963, 50).unwrap());
    }

    #[rstest]
    #[case(537, 2, vec![269, 268])]
    #[case(100, 3, vec![34, 33, 33])]
    #[case(2, 4, vec![1, 1, 0, 0])]
    #[case(0, 3, vec![0, 0, 0])]
    #[case(7, 1, vec![7])]
    fn test_split(#[case] total: u32, #[case] parts: usize, #[case] expected: Vec<u32>) {
        let shares = Money::from_subunit(total, *SEK).split(parts).unwrap();
        let expected: Vec<Money> = expected
            .into_iter()
            .map(|s| Money::from_subunit(s, *SEK))
            .collect();
        assert_eq!(shares, expected);
    }

    #[test]
    fn test_split_by_zero() {
        assert_eq!(sek("1").split(0), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_ratio() {
        assert_eq!(sek("1").ratio(3).unwrap(), SEK.fraction_from_parts(100, 3).unwrap());
        assert_eq!(sek("1").ratio(0), Err(MoneyError::DivisionByZero));
        assert_eq!(
            sek("1").ratio_rational(&Rational::zero()),
            Err(MoneyError::DivisionByZero)
        );
    }

    #[test]
    fn test_fraction_interaction() {
        let third = SEK.fraction_from_parts(1, 3).unwrap();
        assert_eq!(
            SEK.one_subunit().add_fraction(&third).unwrap(),
            SEK.fraction_from_parts(4, 3).unwrap()
        );
        assert_eq!(
            SEK.one_subunit().sub_fraction(&third).unwrap(),
            SEK.fraction_from_parts(2, 3).unwrap()
        );
    }

    #[test]
    fn test_to_decimal() {
        assert_eq!(sek("523.12").to_decimal().unwrap(), dec!(523.12));
        assert_eq!(JPY.money(15).unwrap().to_decimal().unwrap(), dec!(15));
        let huge = Money::from_subunit(u128::MAX, *SEK);
        assert!(matches!(huge.to_decimal(), Err(MoneyError::OutOfRange(_))));
    }
}
