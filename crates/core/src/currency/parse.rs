//! Normalisation of main-unit input into whole sub-unit counts.

use num_traits::Signed;
use strictmoney_shared::{MoneyError, MoneyResult, Nat, Rational};

use super::definition::{Currency, MainUnitValue};

/// Converts a main-unit value into an exact, non-negative sub-unit count.
///
/// Nothing is ever rounded: input finer than one sub-unit is an error, and
/// callers wanting rounding must go through a `SubunitFraction`.
pub(crate) fn normalize_to_subunits(currency: Currency, value: MainUnitValue) -> MoneyResult<Nat> {
    let main_units = match value {
        MainUnitValue::Integer(integer) => {
            if integer.is_negative() {
                return Err(negative());
            }
            Rational::from_integer(integer)
        }
        MainUnitValue::Text(text) => Rational::parse_decimal(&text)
            .map_err(|err| match err {
                MoneyError::Parse(reason) if reason.starts_with("Invalid") => {
                    MoneyError::parse(format!("Could not parse Money from {text:?}"))
                }
                other => other,
            })?,
        MainUnitValue::Decimal(decimal) => Rational::from(decimal),
    };

    if main_units.is_negative() {
        return Err(negative());
    }

    let subunits = main_units * Rational::from(currency.subunit());
    let whole = subunits.to_integer().ok_or_else(|| {
        MoneyError::parse(format!(
            "Cannot interpret value as Money of currency {currency} without loss of \
             precision. Explicitly round the value or consider using SubunitFraction."
        ))
    })?;
    Nat::new(whole)
}

fn negative() -> MoneyError {
    MoneyError::parse("Cannot parse from negative value")
}
