//! Cross-kind arithmetic, fair division and rounding.
//!
//! This module implements:
//! - Operand dispatch over every pairing of value kinds and scalars
//! - Fair division of whole sub-unit amounts
//! - The rounding engine back from exact fractions

pub mod dispatch;
pub mod division;
pub mod operand;
pub mod rounding;

#[cfg(test)]
mod props;

pub use operand::{Monetary, Operand};
pub use rounding::Round;
