//! The monetary value kinds and their conversions.

pub mod balance;
pub mod compare;
pub mod display;
pub mod fraction;
pub mod money;
pub mod overdraft;

pub use balance::Balance;
pub use fraction::SubunitFraction;
pub use money::Money;
pub use overdraft::Overdraft;
