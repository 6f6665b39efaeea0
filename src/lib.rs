//! # Market Data Exporter Library
//!
//! A client library for retrieving historical market data for a chosen
//! instrument from a remote provider and exporting it as a portable CSV file.
//!
//! ## Features
//!
//! - **Parameter Normalization**: Translates user-facing (amount, unit) pairs
//!   into the compact interval/period tokens the provider expects
//! - **CSV Export**: Serializes datasets into escaped delimited text with
//!   round-trip-safe quoting and derives the artifact filename
//! - **Order Preservation**: Records keep the column order of the provider
//!   response end to end
//! - **Graceful Degradation**: Responses lacking the expected shape become
//!   empty datasets instead of errors
//!
//! ## Quick Start
//!
//! ```
//! use market_data_exporter::query::{IntervalSpec, IntervalUnit, PeriodSpec, PeriodUnit};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let interval = IntervalSpec::new(Some(5), IntervalUnit::Minutes)?;
//! let period = PeriodSpec::new(None, PeriodUnit::Ytd)?;
//!
//! assert_eq!(interval.token(), "5m");
//! assert_eq!(period.token(), "ytd");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`query`] - Interval and period parameter normalization
//! - [`fetcher`] - HTTP retrieval of historical records
//! - [`export`] - Delimited-text serialization and file artifacts
//! - [`render`] - Plain-text dataset previews
//! - [`cli`] - Command implementations

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::fmt;

/// CLI command implementations
pub mod cli;

/// Delimited-text serialization and file artifacts
pub mod export;

/// Remote history retrieval
pub mod fetcher;

/// Interval and period parameter normalization
pub mod query;

/// Plain-text dataset previews
pub mod render;

/// Scalar field value decoded from a provider response.
///
/// Integers that fit `i64` stay integers; everything else numeric becomes a
/// float. JSON `null` decodes as the empty string and booleans as their
/// literal text, matching how the values are later stringified for export.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Text value
    Str(String),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => f.write_str(s),
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Float(x) => write!(f, "{x}"),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ScalarVisitor;

        impl serde::de::Visitor<'_> for ScalarVisitor {
            type Value = Scalar;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string, number, boolean, or null")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Scalar, E> {
                Ok(Scalar::Str(v.to_owned()))
            }

            fn visit_string<E: serde::de::Error>(self, v: String) -> Result<Scalar, E> {
                Ok(Scalar::Str(v))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Scalar, E> {
                Ok(Scalar::Int(v))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Scalar, E> {
                Ok(i64::try_from(v).map_or(Scalar::Float(v as f64), Scalar::Int))
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Scalar, E> {
                Ok(Scalar::Float(v))
            }

            fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<Scalar, E> {
                Ok(Scalar::Str(v.to_string()))
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Scalar, E> {
                Ok(Scalar::Str(String::new()))
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

/// One row of tabular data: an ordered set of named scalar fields.
///
/// Deserialization preserves the key order of the source JSON document. All
/// records in a dataset are expected to share the same column set and order;
/// that invariant is owned by the provider contract and is not re-validated
/// here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, Scalar)>,
}

impl Record {
    /// Build a record from (column, value) pairs, preserving their order.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Scalar)>,
        K: Into<String>,
    {
        Self {
            fields: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Column names in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Field values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Scalar> + '_ {
        self.fields.iter().map(|(_, v)| v)
    }

    /// Look up a field by column name.
    pub fn get(&self, column: &str) -> Option<&Scalar> {
        self.fields
            .iter()
            .find(|(k, _)| k == column)
            .map(|(_, v)| v)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'de> serde::Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct RecordVisitor;

        impl<'de> serde::de::Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of column names to scalar values")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Record, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut fields = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, Scalar>()? {
                    fields.push((key, value));
                }
                Ok(Record { fields })
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}
