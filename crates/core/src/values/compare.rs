//! Ordering within and across value kinds.
//!
//! Values of different currencies are unordered: `partial_cmp` returns
//! `None` and every comparison operator evaluates to `false`. Use the
//! `try_cmp` methods to get a `CurrencyMismatch` error instead.

use std::cmp::Ordering;

use strictmoney_shared::Rational;

use super::{Balance, Money, Overdraft, SubunitFraction};
use crate::currency::Currency;

fn within(left: Currency, right: Currency, order: impl FnOnce() -> Ordering) -> Option<Ordering> {
    (left == right).then(order)
}

/// Exact signed sub-unit value used for cross-kind comparison.
trait SignedSubunits {
    fn signed_value(&self) -> Rational;
}

impl SignedSubunits for Money {
    fn signed_value(&self) -> Rational {
        Rational::from(self.signed_subunits())
    }
}

impl SignedSubunits for Overdraft {
    fn signed_value(&self) -> Rational {
        Rational::from(self.signed_subunits())
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        within(self.currency(), other.currency(), || {
            self.subunits().cmp(other.subunits())
        })
    }
}

impl PartialOrd for Overdraft {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        within(self.currency(), other.currency(), || {
            other.subunits().cmp(self.subunits())
        })
    }
}

impl PartialOrd for SubunitFraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        within(self.currency(), other.currency(), || {
            self.value().cmp(other.value())
        })
    }
}

impl PartialOrd for Balance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        within(self.currency(), other.currency(), || {
            self.signed_subunits().cmp(&other.signed_subunits())
        })
    }
}

// Money and Overdraft never hold the same value.

impl PartialEq<Overdraft> for Money {
    fn eq(&self, _other: &Overdraft) -> bool {
        false
    }
}

impl PartialEq<Money> for Overdraft {
    fn eq(&self, _other: &Money) -> bool {
        false
    }
}

impl PartialOrd<Overdraft> for Money {
    fn partial_cmp(&self, other: &Overdraft) -> Option<Ordering> {
        within(self.currency(), other.currency(), || Ordering::Greater)
    }
}

impl PartialOrd<Money> for Overdraft {
    fn partial_cmp(&self, other: &Money) -> Option<Ordering> {
        within(self.currency(), other.currency(), || Ordering::Less)
    }
}

macro_rules! fraction_cross_compare {
    ($($ty:ty),*) => {
        $(
            impl PartialEq<$ty> for SubunitFraction {
                fn eq(&self, other: &$ty) -> bool {
                    self.currency() == other.currency() && *self.value() == other.signed_value()
                }
            }

            impl PartialEq<SubunitFraction> for $ty {
                fn eq(&self, other: &SubunitFraction) -> bool {
                    other == self
                }
            }

            impl PartialOrd<$ty> for SubunitFraction {
                fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                    within(self.currency(), other.currency(), || {
                        self.value().cmp(&other.signed_value())
                    })
                }
            }

            impl PartialOrd<SubunitFraction> for $ty {
                fn partial_cmp(&self, other: &SubunitFraction) -> Option<Ordering> {
                    <SubunitFraction as PartialOrd<$ty>>::partial_cmp(other, self)
                        .map(Ordering::reverse)
                }
            }
        )*
    };
}

fraction_cross_compare!(Money, Overdraft);
