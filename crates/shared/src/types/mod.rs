//! Exact numeric primitives used by every monetary type.

pub mod nat;
pub mod rational;

#[cfg(test)]
mod props;

pub use nat::Nat;
pub use rational::Rational;
