//! Construction, batch construction, and deduplication.

use std::collections::HashSet;

use crate::check::can_be_id;
use crate::value::Value;
use crate::{raw, OidResult};
use bson::oid::ObjectId;

/// Failure policy for [`new_id`].
#[derive(Debug, Clone)]
pub struct NewIdOptions {
    /// Returned when lenient construction cannot coerce the input.
    pub fallback: Value,
    /// When set, non-coercible input fails with
    /// [`OidError::NotCoercible`](crate::OidError::NotCoercible) instead of
    /// resolving to the fallback.
    pub strict: bool,
}

impl Default for NewIdOptions {
    fn default() -> Self {
        Self {
            fallback: Value::Null,
            strict: false,
        }
    }
}

/// Failure policy for [`new_ids`].
#[derive(Debug, Clone)]
pub struct NewIdsOptions {
    /// When set (the default), non-coercible elements are silently skipped.
    /// When cleared, the first non-coercible element aborts the whole batch.
    pub valid_only: bool,
}

impl Default for NewIdsOptions {
    fn default() -> Self {
        Self { valid_only: true }
    }
}

/// Coerces one input into an id, or resolves the configured failure policy.
///
/// - `None` produces a freshly generated id; the options are irrelevant.
/// - With `strict` set, coercion is attempted directly and non-coercible
///   input (including `Null` and empty text) is an error.
/// - Otherwise `Null` and empty text short-circuit to the fallback, anything
///   else failing [`can_be_id`] resolves to the fallback, and coercible input
///   yields `Value::Id`.
///
/// Passing an existing id never fails under any options and returns an equal
/// id.
///
/// # Errors
///
/// `NotCoercible`, only when `options.strict` is set.
pub fn new_id(value: Option<&Value>, options: &NewIdOptions) -> OidResult<Value> {
    let Some(value) = value else {
        return Ok(Value::Id(raw::fresh()));
    };
    if options.strict {
        return raw::coerce(value).map(Value::Id);
    }
    match value {
        Value::Null => Ok(options.fallback.clone()),
        Value::Text(s) if s.is_empty() => Ok(options.fallback.clone()),
        v if !can_be_id(v) => Ok(options.fallback.clone()),
        v => raw::coerce(v).map(Value::Id),
    }
}

/// Coerces a sequence of inputs element-wise, preserving order.
///
/// # Errors
///
/// `NotCoercible` when `options.valid_only` is cleared and any element fails
/// coercion; the whole batch aborts with no partial result.
pub fn new_ids(values: &[Value], options: &NewIdsOptions) -> OidResult<Vec<ObjectId>> {
    if options.valid_only {
        values
            .iter()
            .filter(|v| can_be_id(v))
            .map(raw::coerce)
            .collect()
    } else {
        values.iter().map(raw::coerce).collect()
    }
}

/// Filters a sequence down to first-occurrence-unique ids.
///
/// Non-id elements are dropped silently; duplicates are detected by canonical
/// hex form. The relative order of retained ids is the order of their first
/// occurrence.
pub fn unique_ids(items: &[Value]) -> Vec<ObjectId> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for item in items {
        let Value::Id(id) = item else {
            continue;
        };
        if seen.insert(raw::hex_of(id)) {
            result.push(*id);
        }
    }
    result
}

/// Dedupes a mixed sequence by rendered display text.
///
/// Unlike [`unique_ids`], non-id values are retained; two values collide when
/// their display text is equal (so an id and its canonical hex text count as
/// duplicates of each other). First occurrence wins and order is preserved.
pub fn unique_by_display(items: &[Value]) -> Vec<Value> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for item in items {
        if seen.insert(item.to_string()) {
            result.push(item.clone());
        }
    }
    result
}
