//! Canonical-instance interning shared by every value type.

pub mod cache;

pub use cache::{InstanceCache, Interned};
