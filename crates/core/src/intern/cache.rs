//! Canonical instance caching using Moka.
//!
//! Every monetary value is interned: equal values share one allocation, so
//! identity and equality coincide for the lifetime of the process.

use std::hash::Hash;
use std::sync::Arc;

use moka::sync::Cache;
use tracing::trace;

/// Process-wide map from a normalised representation to its canonical
/// instance.
///
/// The cache is unbounded and has no expiry, so an instance handed out once
/// stays canonical forever. Thread-safe and suitable for concurrent access.
pub struct InstanceCache<T> {
    kind: &'static str,
    cache: Cache<T, Arc<T>>,
}

impl<T> InstanceCache<T>
where
    T: Hash + Eq + Clone + Send + Sync + 'static,
{
    /// Creates an empty cache labelled `kind` in diagnostics.
    #[must_use]
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            cache: Cache::builder().name(kind).build(),
        }
    }

    /// Returns the canonical instance equal to `value`, inserting it if absent.
    ///
    /// Concurrent callers racing on equal values all receive the same `Arc`:
    /// the initialiser runs once per key while the others wait for it.
    pub fn intern(&self, value: T) -> Arc<T> {
        let kind = self.kind;
        self.cache.get_with(value.clone(), move || {
            trace!(kind, "interned new canonical instance");
            Arc::new(value)
        })
    }

    /// Number of canonical instances held.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    /// Returns true if nothing has been interned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Diagnostic label of this cache.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }
}

/// A value representation with its own process-wide [`InstanceCache`].
pub trait Interned: Hash + Eq + Clone + Send + Sync + Sized + 'static {
    /// Kind label used in diagnostics and errors.
    const KIND: &'static str;

    /// The static cache for this kind.
    fn cache() -> &'static InstanceCache<Self>;

    /// Returns the canonical instance equal to `self`.
    fn intern(self) -> Arc<Self> {
        Self::cache().intern(self)
    }
}
