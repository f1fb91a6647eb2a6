//! Thin adapter over `bson::oid::ObjectId`.
//!
//! The id's byte layout, uniqueness algorithm, and hex codec belong to the
//! `bson` crate. This module is the only place that touches its construction
//! and extraction surface; the rest of the facade goes through these four
//! capabilities.

use crate::value::Value;
use crate::{OidError, OidResult};
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};

/// Generates a fresh id from the collaborator's clock and entropy source.
pub(crate) fn fresh() -> ObjectId {
    ObjectId::new()
}

/// Attempts to coerce a candidate value into an id.
///
/// Accepts 24-char hex text (any case), 12-byte buffers, numerics as epoch
/// seconds, and ids themselves (idempotent). Everything else fails with
/// [`OidError::NotCoercible`].
pub(crate) fn coerce(value: &Value) -> OidResult<ObjectId> {
    match value {
        Value::Id(id) => Ok(*id),
        Value::Text(s) => ObjectId::parse_str(s).map_err(|_| not_coercible(value)),
        Value::Bytes(bytes) => {
            let bytes: [u8; 12] = bytes
                .as_slice()
                .try_into()
                .map_err(|_| not_coercible(value))?;
            Ok(ObjectId::from_bytes(bytes))
        }
        Value::Int(n) => Ok(from_epoch_seconds(seconds_from_int(*n))),
        Value::Float(x) => Ok(from_epoch_seconds(seconds_from_float(*x))),
        Value::Null | Value::Bool(_) | Value::Time(_) => Err(not_coercible(value)),
    }
}

/// Extracts the embedded creation time, at second granularity.
pub(crate) fn timestamp_of(id: &ObjectId) -> DateTime<Utc> {
    id.timestamp().to_chrono()
}

/// Canonical 24-character lowercase hex form.
pub(crate) fn hex_of(id: &ObjectId) -> String {
    id.to_hex()
}

fn not_coercible(value: &Value) -> OidError {
    OidError::NotCoercible(value.to_string())
}

/// Seeds an id with the given creation time and a zeroed machine/process/
/// counter tail. `bson` has no timestamp-seeded constructor of its own.
fn from_epoch_seconds(seconds: u32) -> ObjectId {
    let mut bytes = [0u8; 12];
    bytes[..4].copy_from_slice(&seconds.to_be_bytes());
    ObjectId::from_bytes(bytes)
}

/// The creation-time field is an unsigned 4-byte value; out-of-range input
/// saturates.
fn seconds_from_int(n: i64) -> u32 {
    n.clamp(0, i64::from(u32::MAX)) as u32
}

/// `as` saturates for finite floats; NaN maps to the epoch.
fn seconds_from_float(x: f64) -> u32 {
    if x.is_nan() {
        0
    } else {
        x as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_is_idempotent_for_ids() {
        let id = fresh();
        let again = coerce(&Value::Id(id)).unwrap();
        assert_eq!(id, again);
    }

    #[test]
    fn test_coerce_accepts_mixed_case_hex() {
        let id = coerce(&Value::Text("507F1F77BCF86cd799439011".to_owned())).unwrap();
        assert_eq!(hex_of(&id), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn test_coerce_twelve_byte_buffer() {
        let id = coerce(&Value::Bytes(vec![0xab; 12])).unwrap();
        assert_eq!(hex_of(&id), "ab".repeat(12));
    }

    #[test]
    fn test_coerce_rejects_wrong_byte_length() {
        assert!(coerce(&Value::Bytes(vec![0xab; 11])).is_err());
        assert!(coerce(&Value::Bytes(vec![0xab; 13])).is_err());
    }

    #[test]
    fn test_epoch_seconds_land_in_leading_bytes() {
        let id = coerce(&Value::Int(1_672_531_200)).unwrap();
        assert_eq!(timestamp_of(&id).timestamp(), 1_672_531_200);
        // The tail is all zeros for timestamp-seeded ids.
        assert!(hex_of(&id).ends_with("0000000000000000"));
    }

    #[test]
    fn test_numeric_edge_cases() {
        assert_eq!(seconds_from_int(-1), 0);
        assert_eq!(seconds_from_int(i64::MAX), u32::MAX);
        assert_eq!(seconds_from_float(f64::NAN), 0);
        assert_eq!(seconds_from_float(-5.0), 0);
        assert_eq!(seconds_from_float(1.9), 1);
    }

    #[test]
    fn test_coerce_rejects_non_candidates() {
        for value in [
            Value::Null,
            Value::Bool(false),
            Value::Time(Utc::now()),
            Value::Text(String::new()),
            Value::Text("not hex at all".to_owned()),
        ] {
            assert!(coerce(&value).is_err(), "coerced {value:?}");
        }
    }
}
