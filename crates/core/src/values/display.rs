//! Plain-text rendering of monetary values.
//!
//! `Display` joins the amount and the currency code with a no-break space;
//! locale-aware formatting is left to callers.

use std::fmt;

use strictmoney_shared::Nat;

use super::{Balance, Money, Overdraft, SubunitFraction};

const NO_BREAK_SPACE: char = '\u{a0}';

/// Renders a sub-unit count as a main-unit decimal with a fixed number of
/// fractional digits.
pub(crate) fn main_unit_string(subunits: &Nat, decimal_places: u32) -> String {
    let digits = subunits.to_string();
    let places = decimal_places as usize;
    if places == 0 {
        return digits;
    }
    let padded = format!("{digits:0>width$}", width = places + 1);
    let (whole, fraction) = padded.split_at(padded.len() - places);
    format!("{whole}.{fraction}")
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = main_unit_string(self.subunits(), self.currency().decimal_places());
        write!(f, "{amount}{NO_BREAK_SPACE}{}", self.currency())
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = main_unit_string(self.subunits(), self.currency().decimal_places());
        write!(f, "Money('{amount}', {})", self.currency())
    }
}

impl fmt::Display for Overdraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = main_unit_string(self.subunits(), self.currency().decimal_places());
        write!(f, "-{amount}{NO_BREAK_SPACE}{}", self.currency())
    }
}

impl fmt::Debug for Overdraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = main_unit_string(self.subunits(), self.currency().decimal_places());
        write!(f, "Overdraft('{amount}', {})", self.currency())
    }
}

impl fmt::Display for SubunitFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{NO_BREAK_SPACE}{}", self.value(), self.currency())
    }
}

impl fmt::Debug for SubunitFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubunitFraction('{}', {})", self.value(), self.currency())
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Money(money) => fmt::Display::fmt(money, f),
            Self::Overdraft(overdraft) => fmt::Display::fmt(overdraft, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::catalog::{BHD, JPY, SEK};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(0u32, 2, "0.00")]
    #[case(1, 2, "0.01")]
    #[case(52312, 2, "523.12")]
    #[case(5, 3, "0.005")]
    #[case(12, 0, "12")]
    fn test_main_unit_string(#[case] subunits: u32, #[case] places: u32, #[case] expected: &str) {
        assert_eq!(main_unit_string(&Nat::from(subunits), places), expected);
    }

    #[test]
    fn test_money() {
        let money = SEK.money("523.12").unwrap();
        assert_eq!(money.to_string(), "523.12\u{a0}SEK");
        assert_eq!(format!("{money:?}"), "Money('523.12', SEK)");
        assert_eq!(JPY.money(12).unwrap().to_string(), "12\u{a0}JPY");
        assert_eq!(BHD.money("1.5").unwrap().to_string(), "1.500\u{a0}BHD");
    }

    #[test]
    fn test_overdraft() {
        let overdraft = SEK.overdraft("523.12").unwrap();
        assert_eq!(overdraft.to_string(), "-523.12\u{a0}SEK");
        assert_eq!(
            format!("{:?}", SEK.overdraft("0.01").unwrap()),
            "Overdraft('0.01', SEK)"
        );
    }

    #[test]
    fn test_fraction() {
        let fraction = SEK.fraction(dec!(523.1234));
        assert_eq!(fraction.to_string(), "2615617/5000\u{a0}SEK");
        assert_eq!(format!("{fraction:?}"), "SubunitFraction('2615617/5000', SEK)");
        assert_eq!(
            format!("{:?}", SEK.fraction(dec!(52.13))),
            "SubunitFraction('5213/100', SEK)"
        );
    }

    #[test]
    fn test_balance() {
        assert_eq!(Balance::from(SEK.zero()).to_string(), "0.00\u{a0}SEK");
        assert_eq!(
            Balance::from(SEK.overdraft(1).unwrap()).to_string(),
            "-1.00\u{a0}SEK"
        );
    }
}
