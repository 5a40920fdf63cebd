//! Exact monetary value types for strictmoney.
//!
//! This crate contains the value-type engine with ZERO floating point: every
//! amount is an exact integer or rational number of sub-units.
//!
//! # Modules
//!
//! - `currency` - Currency definitions, input normalisation, registries and the ISO catalog
//! - `intern` - Canonical instance caches
//! - `values` - `Money`, `Overdraft`, `SubunitFraction` and `Balance`
//! - `arithmetic` - Cross-kind dispatch, fair division and rounding
//! - `records` - Wire records and serde support
//!
//! # Example
//!
//! ```
//! use strictmoney_core::{Balance, Round};
//! use strictmoney_core::currency::catalog::SEK;
//!
//! let rent = SEK.money("1000").unwrap();
//! let spent = SEK.money("1200.50").unwrap();
//! assert_eq!(
//!     rent.checked_sub(&spent).unwrap(),
//!     Balance::Overdraft(SEK.overdraft("200.50").unwrap())
//! );
//!
//! let vat = rent.mul_rational(&"0.25".parse().unwrap());
//! assert_eq!(vat.round_to_money(Round::HalfEven).unwrap(), SEK.money(250).unwrap());
//! ```

pub mod arithmetic;
pub mod currency;
pub mod intern;
pub mod records;
pub mod values;

pub use arithmetic::{Monetary, Operand, Round};
pub use currency::{Currency, CurrencyCollector, CurrencyRegistry, MainUnitValue};
pub use records::{
    FromRecord, InRegistry, MoneyRecord, OverdraftRecord, SubunitFractionRecord,
};
pub use values::{Balance, Money, Overdraft, SubunitFraction};

pub use strictmoney_shared::{MoneyError, MoneyResult, Nat, Rational};
