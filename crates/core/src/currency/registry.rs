//! Lookup of currencies by code.
//!
//! A [`CurrencyCollector`] gathers definitions single-threaded, then
//! [`CurrencyCollector::finalize`] seals them into a read-only
//! [`CurrencyRegistry`] that can be shared freely.

use std::collections::BTreeMap;

use strictmoney_shared::{MoneyConfig, MoneyError, MoneyResult};
use tracing::debug;

use super::catalog;
use super::definition::Currency;

/// Mutable builder for a [`CurrencyRegistry`].
#[derive(Debug, Clone, Default)]
pub struct CurrencyCollector {
    collection: Vec<Currency>,
}

impl CurrencyCollector {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a currency. A later addition with the same code replaces the
    /// earlier one when the collector is sealed.
    pub fn add(&mut self, currency: Currency) -> &mut Self {
        self.collection.push(currency);
        self
    }

    /// Seals the collected currencies into an immutable registry.
    #[must_use]
    pub fn finalize(self) -> CurrencyRegistry {
        let currencies: BTreeMap<&'static str, Currency> = self
            .collection
            .into_iter()
            .map(|currency| (currency.code(), currency))
            .collect();
        debug!(currencies = currencies.len(), "sealed currency registry");
        CurrencyRegistry { currencies }
    }
}

impl Extend<Currency> for CurrencyCollector {
    fn extend<I: IntoIterator<Item = Currency>>(&mut self, iter: I) {
        self.collection.extend(iter);
    }
}

/// Immutable mapping from currency code to [`Currency`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyRegistry {
    currencies: BTreeMap<&'static str, Currency>,
}

impl CurrencyRegistry {
    /// Builds the ISO catalog plus every currency declared in configuration.
    ///
    /// Configured currencies replace catalog entries sharing their code.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidSubunit`] if a configured currency has a
    /// granularity that is not a power of ten.
    pub fn from_config(config: &MoneyConfig) -> MoneyResult<Self> {
        let mut collector = CurrencyCollector::new();
        collector.extend(catalog::registry().iter());
        for definition in &config.currencies {
            collector.add(Currency::new(&definition.code, definition.subunit)?);
        }
        Ok(collector.finalize())
    }

    /// Looks up a currency by code.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::UnknownCurrency`] if no currency has that code.
    pub fn get(&self, code: &str) -> MoneyResult<Currency> {
        self.lookup(code)
            .ok_or_else(|| MoneyError::UnknownCurrency(code.to_string()))
    }

    /// Looks up a currency by code.
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<Currency> {
        self.currencies.get(code).copied()
    }

    /// Number of registered currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// Returns true if no currency is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// Registered codes in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.currencies.keys().copied()
    }

    /// Registered currencies ordered by code.
    pub fn iter(&self) -> impl Iterator<Item = Currency> + '_ {
        self.currencies.values().copied()
    }
}
