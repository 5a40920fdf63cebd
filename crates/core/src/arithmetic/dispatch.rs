//! Operator dispatch over every pairing of value kinds and scalars.
//!
//! Each operation matches on both operands. Pairings without a meaning, such
//! as multiplying two amounts or adding a bare number to an amount, fail with
//! [`MoneyError::UnsupportedOperand`].

use std::cmp::Ordering;

use strictmoney_shared::{MoneyError, MoneyResult, Rational};

use super::operand::{Monetary, Operand};

fn unsupported(op: &'static str, left: &'static str, right: &'static str) -> MoneyError {
    MoneyError::UnsupportedOperand { op, left, right }
}

#[allow(clippy::should_implement_trait)]
impl Monetary {
    /// `self + rhs`.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` across currencies, `UnsupportedOperand` for scalars.
    pub fn add(&self, rhs: impl Into<Operand>) -> MoneyResult<Self> {
        let rhs = rhs.into();
        match (self, &rhs) {
            (Self::Money(a), Operand::Money(b)) => a.checked_add(b).map(Self::from),
            (Self::Money(a), Operand::Overdraft(b)) => a.add_overdraft(b).map(Self::from),
            (Self::Money(a), Operand::Fraction(b)) => a.add_fraction(b).map(Self::from),
            (Self::Overdraft(a), Operand::Money(b)) => a.add_money(b).map(Self::from),
            (Self::Overdraft(a), Operand::Overdraft(b)) => a.checked_add(b).map(Self::from),
            (Self::Overdraft(a), Operand::Fraction(b)) => a.add_fraction(b).map(Self::from),
            (Self::Fraction(a), Operand::Money(b)) => a.add_money(b).map(Self::from),
            (Self::Fraction(a), Operand::Overdraft(b)) => a.add_overdraft(b).map(Self::from),
            (Self::Fraction(a), Operand::Fraction(b)) => a.checked_add(b).map(Self::from),
            (_, Operand::Integer(_) | Operand::Rational(_)) => {
                Err(unsupported("+", self.kind(), rhs.kind()))
            }
        }
    }

    /// `self - rhs`.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` across currencies, `UnsupportedOperand` for scalars.
    pub fn sub(&self, rhs: impl Into<Operand>) -> MoneyResult<Self> {
        let rhs = rhs.into();
        match (self, &rhs) {
            (Self::Money(a), Operand::Money(b)) => a.checked_sub(b).map(Self::from),
            (Self::Money(a), Operand::Overdraft(b)) => a.sub_overdraft(b).map(Self::from),
            (Self::Money(a), Operand::Fraction(b)) => a.sub_fraction(b).map(Self::from),
            (Self::Overdraft(a), Operand::Money(b)) => a.sub_money(b).map(Self::from),
            (Self::Overdraft(a), Operand::Overdraft(b)) => a.checked_sub(b).map(Self::from),
            (Self::Overdraft(a), Operand::Fraction(b)) => a.sub_fraction(b).map(Self::from),
            (Self::Fraction(a), Operand::Money(b)) => a.sub_money(b).map(Self::from),
            (Self::Fraction(a), Operand::Overdraft(b)) => a.sub_overdraft(b).map(Self::from),
            (Self::Fraction(a), Operand::Fraction(b)) => a.checked_sub(b).map(Self::from),
            (_, Operand::Integer(_) | Operand::Rational(_)) => {
                Err(unsupported("-", self.kind(), rhs.kind()))
            }
        }
    }

    /// `self * rhs` for a scalar `rhs`.
    ///
    /// # Errors
    ///
    /// `UnsupportedOperand` when `rhs` is a monetary value.
    pub fn mul(&self, rhs: impl Into<Operand>) -> MoneyResult<Self> {
        let rhs = rhs.into();
        match (self, &rhs) {
            (Self::Money(a), Operand::Integer(k)) => Ok(a.mul_integer(k.clone()).into()),
            (Self::Overdraft(a), Operand::Integer(k)) => Ok(a.mul_integer(k.clone()).into()),
            (Self::Fraction(a), Operand::Integer(k)) => Ok(a.mul_integer(k.clone()).into()),
            (_, Operand::Rational(k)) => Ok(self.to_fraction().mul_rational(k).into()),
            (_, Operand::Money(_) | Operand::Overdraft(_) | Operand::Fraction(_)) => {
                Err(unsupported("*", self.kind(), rhs.kind()))
            }
        }
    }

    /// `self / rhs` for a scalar `rhs`, always an exact fraction.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` for a zero divisor, `UnsupportedOperand` when `rhs`
    /// is a monetary value.
    pub fn div(&self, rhs: impl Into<Operand>) -> MoneyResult<Self> {
        let rhs = rhs.into();
        let divisor = match &rhs {
            Operand::Integer(k) => Rational::from(k.clone()),
            Operand::Rational(k) => k.clone(),
            Operand::Money(_) | Operand::Overdraft(_) | Operand::Fraction(_) => {
                return Err(unsupported("/", self.kind(), rhs.kind()));
            }
        };
        self.to_fraction().div_rational(&divisor).map(Self::from)
    }

    /// Reflected division `lhs / self` for a scalar `lhs`.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if `self` is zero, `UnsupportedOperand` when `lhs` is
    /// a monetary value.
    pub fn rdiv(&self, lhs: impl Into<Operand>) -> MoneyResult<Self> {
        let lhs = lhs.into();
        let dividend = match &lhs {
            Operand::Integer(k) => Rational::from(k.clone()),
            Operand::Rational(k) => k.clone(),
            Operand::Money(_) | Operand::Overdraft(_) | Operand::Fraction(_) => {
                return Err(unsupported("/", lhs.kind(), self.kind()));
            }
        };
        self.to_fraction().rdiv_rational(&dividend).map(Self::from)
    }

    /// The additive inverse.
    #[must_use]
    pub fn neg(&self) -> Self {
        match self {
            Self::Money(money) => money.negate().into(),
            Self::Overdraft(overdraft) => overdraft.negate().into(),
            Self::Fraction(fraction) => fraction.negate().into(),
        }
    }

    /// Orders two values of the same currency by exact signed value.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` across currencies.
    pub fn try_cmp(&self, other: &Self) -> MoneyResult<Ordering> {
        self.currency().ensure_same(other.currency())?;
        Ok(self.to_fraction().value().cmp(other.to_fraction().value()))
    }
}
