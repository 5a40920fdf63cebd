//! Shared types, errors, and configuration for strictmoney.
//!
//! This crate provides the pieces the value types are built from:
//! - Exact non-negative integers and rationals
//! - The library-wide error type
//! - Configuration management
//! - Tracing setup

pub mod config;
pub mod error;
pub mod telemetry;
pub mod types;

pub use config::{CurrencyDefinition, LoggingConfig, MoneyConfig};
pub use error::{MoneyError, MoneyResult};
pub use types::{Nat, Rational};
