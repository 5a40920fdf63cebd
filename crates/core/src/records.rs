//! Wire records for the value types.
//!
//! Every record holds unbounded integers, so a value survives
//! `value -> record -> value` unchanged and exporting a value never fails.
//! Integers that fit 64 bits travel as plain numbers; wider ones travel as
//! decimal strings so that formats without big-number support keep them exact.
//!
//! Currencies travel as their code. The `Deserialize` impls on the value types
//! resolve codes through the default catalog registry; values in custom
//! currencies read back through [`InRegistry`].

use std::marker::PhantomData;

use num_bigint::{BigInt, BigUint};
use serde::de::{DeserializeOwned, DeserializeSeed, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strictmoney_shared::MoneyResult;

use crate::currency::{Currency, CurrencyRegistry, catalog};
use crate::values::{Money, Overdraft, SubunitFraction};

/// Wire form of a [`Money`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyRecord {
    /// Count of sub-units.
    #[serde(
        serialize_with = "exact_integer::serialize_unsigned",
        deserialize_with = "exact_integer::deserialize_unsigned"
    )]
    pub subunits: BigUint,
    /// Currency code.
    pub currency: String,
}

impl MoneyRecord {
    /// Resolves the record into a value.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::UnknownCurrency`](crate::MoneyError::UnknownCurrency)
    /// if the code is not registered.
    pub fn to_money(&self, registry: &CurrencyRegistry) -> MoneyResult<Money> {
        Ok(Money::from_subunit(
            self.subunits.clone(),
            registry.get(&self.currency)?,
        ))
    }
}

impl From<&Money> for MoneyRecord {
    fn from(value: &Money) -> Self {
        Self {
            subunits: value.subunits().as_biguint().clone(),
            currency: value.currency().code().to_string(),
        }
    }
}

/// Wire form of an [`Overdraft`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverdraftRecord {
    /// Magnitude of the deficit in sub-units; must be positive.
    #[serde(
        serialize_with = "exact_integer::serialize_unsigned",
        deserialize_with = "exact_integer::deserialize_unsigned"
    )]
    pub overdraft_subunits: BigUint,
    /// Currency code.
    pub currency: String,
}

impl OverdraftRecord {
    /// Resolves the record into a value.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::UnknownCurrency`](crate::MoneyError::UnknownCurrency)
    /// if the code is not registered and
    /// [`MoneyError::InvalidOverdraftValue`](crate::MoneyError::InvalidOverdraftValue)
    /// for a zero magnitude.
    pub fn to_overdraft(&self, registry: &CurrencyRegistry) -> MoneyResult<Overdraft> {
        Overdraft::from_subunit(
            self.overdraft_subunits.clone(),
            registry.get(&self.currency)?,
        )
    }
}

impl From<&Overdraft> for OverdraftRecord {
    fn from(value: &Overdraft) -> Self {
        Self {
            overdraft_subunits: value.subunits().as_biguint().clone(),
            currency: value.currency().code().to_string(),
        }
    }
}

/// Wire form of a [`SubunitFraction`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubunitFractionRecord {
    /// Numerator of the sub-unit count.
    #[serde(
        serialize_with = "exact_integer::serialize_signed",
        deserialize_with = "exact_integer::deserialize_signed"
    )]
    pub numerator: BigInt,
    /// Denominator of the sub-unit count; must be nonzero.
    #[serde(
        serialize_with = "exact_integer::serialize_signed",
        deserialize_with = "exact_integer::deserialize_signed"
    )]
    pub denominator: BigInt,
    /// Currency code.
    pub currency: String,
}

impl SubunitFractionRecord {
    /// Resolves the record into a value, normalising sign and common factors.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::UnknownCurrency`](crate::MoneyError::UnknownCurrency)
    /// if the code is not registered and
    /// [`MoneyError::DivisionByZero`](crate::MoneyError::DivisionByZero) for a
    /// zero denominator.
    pub fn to_fraction(&self, registry: &CurrencyRegistry) -> MoneyResult<SubunitFraction> {
        SubunitFraction::from_parts(
            self.numerator.clone(),
            self.denominator.clone(),
            registry.get(&self.currency)?,
        )
    }
}

impl From<&SubunitFraction> for SubunitFractionRecord {
    fn from(value: &SubunitFraction) -> Self {
        Self {
            numerator: value.value().numer().clone(),
            denominator: value.value().denom().clone(),
            currency: value.currency().code().to_string(),
        }
    }
}

mod exact_integer {
    use std::fmt;

    use num_bigint::{BigInt, BigUint};
    use num_traits::ToPrimitive;
    use serde::de::{Error, Unexpected, Visitor};
    use serde::{Deserializer, Serializer};

    pub(super) fn serialize_unsigned<S: Serializer>(
        value: &BigUint,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value.to_u64() {
            Some(small) => serializer.serialize_u64(small),
            None => serializer.collect_str(value),
        }
    }

    pub(super) fn serialize_signed<S: Serializer>(
        value: &BigInt,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value.to_i64() {
            Some(small) => serializer.serialize_i64(small),
            None => serializer.collect_str(value),
        }
    }

    pub(super) fn deserialize_unsigned<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BigUint, D::Error> {
        deserializer
            .deserialize_any(ExactIntegerVisitor)?
            .to_biguint()
            .ok_or_else(|| D::Error::custom("expected a non-negative integer"))
    }

    pub(super) fn deserialize_signed<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BigInt, D::Error> {
        deserializer.deserialize_any(ExactIntegerVisitor)
    }

    struct ExactIntegerVisitor;

    impl Visitor<'_> for ExactIntegerVisitor {
        type Value = BigInt;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integer or a string of decimal digits")
        }

        fn visit_i64<E: Error>(self, value: i64) -> Result<BigInt, E> {
            Ok(BigInt::from(value))
        }

        fn visit_u64<E: Error>(self, value: u64) -> Result<BigInt, E> {
            Ok(BigInt::from(value))
        }

        fn visit_i128<E: Error>(self, value: i128) -> Result<BigInt, E> {
            Ok(BigInt::from(value))
        }

        fn visit_u128<E: Error>(self, value: u128) -> Result<BigInt, E> {
            Ok(BigInt::from(value))
        }

        fn visit_str<E: Error>(self, value: &str) -> Result<BigInt, E> {
            let digits = value.strip_prefix('-').unwrap_or(value);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(E::invalid_value(Unexpected::Str(value), &self));
            }
            BigInt::parse_bytes(value.as_bytes(), 10)
                .ok_or_else(|| E::invalid_value(Unexpected::Str(value), &self))
        }
    }
}

/// A value that can be rebuilt from its wire record against a registry.
pub trait FromRecord: Sized {
    /// The wire form read from the input.
    type Record: DeserializeOwned;

    /// Resolves a record read from the input.
    ///
    /// # Errors
    ///
    /// Returns the error of the matching `to_*` conversion.
    fn from_record(record: Self::Record, registry: &CurrencyRegistry) -> MoneyResult<Self>;
}

impl FromRecord for Currency {
    type Record = String;

    fn from_record(code: String, registry: &CurrencyRegistry) -> MoneyResult<Self> {
        registry.get(&code)
    }
}

impl FromRecord for Money {
    type Record = MoneyRecord;

    fn from_record(record: MoneyRecord, registry: &CurrencyRegistry) -> MoneyResult<Self> {
        record.to_money(registry)
    }
}

impl FromRecord for Overdraft {
    type Record = OverdraftRecord;

    fn from_record(record: OverdraftRecord, registry: &CurrencyRegistry) -> MoneyResult<Self> {
        record.to_overdraft(registry)
    }
}

impl FromRecord for SubunitFraction {
    type Record = SubunitFractionRecord;

    fn from_record(
        record: SubunitFractionRecord,
        registry: &CurrencyRegistry,
    ) -> MoneyResult<Self> {
        record.to_fraction(registry)
    }
}

/// Reads a value whose currency code resolves through a given registry.
///
/// The plain `Deserialize` impls only know the catalog, so values in custom
/// currencies read back through this seed instead.
///
/// # Example
///
/// ```
/// use serde::de::DeserializeSeed;
/// use strictmoney_core::records::InRegistry;
/// use strictmoney_core::{Currency, CurrencyCollector, Money};
///
/// let xbt = Currency::new("XBT", 100_000_000).unwrap();
/// let mut collector = CurrencyCollector::new();
/// collector.add(xbt);
/// let registry = collector.finalize();
///
/// let json = serde_json::to_string(&xbt.money("1").unwrap()).unwrap();
/// let mut input = serde_json::Deserializer::from_str(&json);
/// let money: Money = InRegistry::new(&registry).deserialize(&mut input).unwrap();
/// assert_eq!(money, xbt.money("1").unwrap());
/// ```
pub struct InRegistry<'r, T> {
    registry: &'r CurrencyRegistry,
    marker: PhantomData<fn() -> T>,
}

impl<'r, T> InRegistry<'r, T> {
    /// Resolves currency codes through `registry`.
    #[must_use]
    pub const fn new(registry: &'r CurrencyRegistry) -> Self {
        Self {
            registry,
            marker: PhantomData,
        }
    }
}

impl<'de, T: FromRecord> DeserializeSeed<'de> for InRegistry<'_, T> {
    type Value = T;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<T, D::Error> {
        let record = <T::Record as Deserialize<'de>>::deserialize(deserializer)?;
        T::from_record(record, self.registry).map_err(D::Error::custom)
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// Resolves the code through the catalog; see [`InRegistry`] for custom
/// currencies.
impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        InRegistry::<Self>::new(catalog::registry()).deserialize(deserializer)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MoneyRecord::from(self).serialize(serializer)
    }
}

/// Resolves the code through the catalog; see [`InRegistry`] for custom
/// currencies.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        InRegistry::<Self>::new(catalog::registry()).deserialize(deserializer)
    }
}

impl Serialize for Overdraft {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        OverdraftRecord::from(self).serialize(serializer)
    }
}

/// Resolves the code through the catalog; see [`InRegistry`] for custom
/// currencies.
impl<'de> Deserialize<'de> for Overdraft {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        InRegistry::<Self>::new(catalog::registry()).deserialize(deserializer)
    }
}

impl Serialize for SubunitFraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SubunitFractionRecord::from(self).serialize(serializer)
    }
}

/// Resolves the code through the catalog; see [`InRegistry`] for custom
/// currencies.
impl<'de> Deserialize<'de> for SubunitFraction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        InRegistry::<Self>::new(catalog::registry()).deserialize(deserializer)
    }
}
