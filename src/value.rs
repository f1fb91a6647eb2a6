//! The heterogeneous-input union accepted by the facade.

use bson::oid::ObjectId;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;

/// A value that may or may not be coercible to an [`ObjectId`].
///
/// Inputs reaching the facade come from untyped edges (request payloads,
/// log fields, batch files), so they are modelled as an explicit union
/// rather than a generic parameter. [`can_be_id`](crate::can_be_id) reports
/// whether a given `Value` would survive coercion:
///
/// - [`Value::Text`] — coercible when it is exactly 24 hex characters.
/// - [`Value::Bytes`] — coercible when it is exactly 12 bytes.
/// - [`Value::Int`] / [`Value::Float`] — always coercible; interpreted as
///   epoch seconds for the id's creation-time field.
/// - [`Value::Id`] — trivially coercible; coercion is idempotent.
/// - [`Value::Null`], [`Value::Bool`], [`Value::Time`] — never coercible.
///
/// `Time` exists for the comparators, which accept either an id or a plain
/// timestamp on each side.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// No value. Lenient construction maps this to the configured fallback.
    Null,
    Bool(bool),
    /// Epoch seconds.
    Int(i64),
    /// Epoch seconds; `NaN` is accepted and maps to the epoch itself.
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    /// A plain timestamp, used as a comparator operand.
    Time(DateTime<Utc>),
    /// An already-constructed id.
    Id(ObjectId),
}

impl fmt::Display for Value {
    /// Renders the display text of any value, valid id or not.
    ///
    /// Ids and byte buffers render as lowercase hex, timestamps as RFC 3339,
    /// `Null` as `null`. This is intentionally total; it never validates.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => f.write_str(s),
            Value::Bytes(bytes) => {
                for byte in bytes {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
            Value::Time(t) => f.write_str(&t.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Value::Id(id) => write!(f, "{id}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<[u8; 12]> for Value {
    fn from(bytes: [u8; 12]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Value::Time(t)
    }
}

impl From<ObjectId> for Value {
    fn from(id: ObjectId) -> Self {
        Value::Id(id)
    }
}
