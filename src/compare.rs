//! Temporal ordering between ids and plain timestamps.
//!
//! Each operand resolves independently: an id contributes its embedded
//! creation time, a `Value::Time` contributes itself, anything else is
//! unresolvable. The lenient comparators answer `false` for unresolvable
//! operands; the strict variants fail instead. Equal timestamps are neither
//! after nor before one another.

use crate::value::Value;
use crate::{raw, OidError, OidResult};
use chrono::{DateTime, Utc};

fn resolve(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Id(id) => Some(raw::timestamp_of(id)),
        Value::Time(t) => Some(*t),
        _ => None,
    }
}

/// Returns true if `a`'s resolved time is strictly after `b`'s.
///
/// `false` when either operand is neither an id nor a timestamp.
pub fn is_after(a: &Value, b: &Value) -> bool {
    matches!((resolve(a), resolve(b)), (Some(x), Some(y)) if x > y)
}

/// Returns true if `a`'s resolved time is strictly before `b`'s.
///
/// `false` when either operand is neither an id nor a timestamp.
pub fn is_before(a: &Value, b: &Value) -> bool {
    matches!((resolve(a), resolve(b)), (Some(x), Some(y)) if x < y)
}

/// Strict variant of [`is_after`].
///
/// # Errors
///
/// `InvalidComparison` when either operand is unresolvable.
pub fn try_is_after(a: &Value, b: &Value) -> OidResult<bool> {
    match (resolve(a), resolve(b)) {
        (Some(x), Some(y)) => Ok(x > y),
        _ => Err(OidError::InvalidComparison),
    }
}

/// Strict variant of [`is_before`].
///
/// # Errors
///
/// `InvalidComparison` when either operand is unresolvable.
pub fn try_is_before(a: &Value, b: &Value) -> OidResult<bool> {
    match (resolve(a), resolve(b)) {
        (Some(x), Some(y)) => Ok(x < y),
        _ => Err(OidError::InvalidComparison),
    }
}
