//! Accessors: id → creation time, id → canonical text, anything → display
//! text.

use crate::value::Value;
use crate::{raw, OidError, OidResult};
use chrono::{DateTime, Utc};

/// Returns the embedded creation time of an id, or `None` for anything else.
///
/// The creation time has second granularity. Callers wanting a fallback
/// value chain with `unwrap_or`.
pub fn timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Id(id) => Some(raw::timestamp_of(id)),
        _ => None,
    }
}

/// Strict variant of [`timestamp`].
///
/// # Errors
///
/// `NotAnObjectId` when `value` is not an id.
pub fn try_timestamp(value: &Value) -> OidResult<DateTime<Utc>> {
    timestamp(value).ok_or(OidError::NotAnObjectId)
}

/// Returns the canonical 24-character lowercase hex form of an id.
///
/// # Errors
///
/// `NotAnObjectId` when `value` is not an id. For a rendering that accepts
/// anything, use [`display_string`].
pub fn try_hex(value: &Value) -> OidResult<String> {
    match value {
        Value::Id(id) => Ok(raw::hex_of(id)),
        _ => Err(OidError::NotAnObjectId),
    }
}

/// Renders any value as display text, valid id or not.
///
/// Intentionally permissive: `Null` renders as `null`, byte buffers as hex,
/// timestamps as RFC 3339. Never validates its input.
pub fn display_string(value: &Value) -> String {
    value.to_string()
}
