//! Currency definitions, input normalisation and registries.

pub mod catalog;
pub mod definition;
pub mod parse;
pub mod registry;

pub use definition::{Currency, MainUnitValue};
pub use registry::{CurrencyCollector, CurrencyRegistry};
