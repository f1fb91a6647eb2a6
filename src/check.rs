//! Shape and identity predicates. All are total and never panic.

use crate::value::Value;

/// Returns true if `value`'s shape would survive coercion to an ObjectId.
///
/// This is a purely syntactic check:
/// - text: exactly 24 hex characters (either case)
/// - bytes: exactly 12 bytes
/// - numerics: always (interpreted as epoch seconds)
/// - an existing id: always
///
/// `Null`, booleans, plain timestamps, and empty or malformed text are not
/// coercible.
pub fn can_be_id(value: &Value) -> bool {
    match value {
        Value::Id(_) => true,
        Value::Text(s) => s.len() == 24 && s.bytes().all(|b| b.is_ascii_hexdigit()),
        Value::Bytes(bytes) => bytes.len() == 12,
        Value::Int(_) | Value::Float(_) => true,
        Value::Null | Value::Bool(_) | Value::Time(_) => false,
    }
}

/// Returns true if `value` is an already-constructed ObjectId.
pub fn is_id(value: &Value) -> bool {
    matches!(value, Value::Id(_))
}

/// Returns true only when both operands are ObjectIds with equal byte values.
///
/// Never fails: any non-id operand makes the answer `false`, including the
/// case where one side is the other's canonical hex text.
pub fn is_same_id(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Id(x), Value::Id(y)) => x == y,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw;

    #[test]
    fn test_can_be_id_canonical_text() {
        assert!(can_be_id(&Value::from("507f1f77bcf86cd799439011")));
        assert!(can_be_id(&Value::from("507F1F77BCF86CD799439011")));
    }

    #[test]
    fn test_can_be_id_rejects_malformed_text() {
        assert!(!can_be_id(&Value::from("")));
        assert!(!can_be_id(&Value::from("invalid")));
        assert!(!can_be_id(&Value::from("507f1f77bcf86cd79943901"))); // 23 chars
        assert!(!can_be_id(&Value::from("507f1f77bcf86cd7994390111"))); // 25 chars
        assert!(!can_be_id(&Value::from("507f1f77bcf86cd79943901z")));
    }

    #[test]
    fn test_can_be_id_buffers() {
        assert!(can_be_id(&Value::Bytes(vec![0u8; 12])));
        assert!(!can_be_id(&Value::Bytes(vec![0u8; 11])));
        assert!(!can_be_id(&Value::Bytes(Vec::new())));
    }

    #[test]
    fn test_can_be_id_numerics() {
        assert!(can_be_id(&Value::Int(0)));
        assert!(can_be_id(&Value::Int(-1)));
        assert!(can_be_id(&Value::Float(f64::NAN)));
    }

    #[test]
    fn test_can_be_id_rejects_other_shapes() {
        assert!(!can_be_id(&Value::Null));
        assert!(!can_be_id(&Value::Bool(true)));
        assert!(!can_be_id(&Value::Time(chrono::Utc::now())));
    }

    #[test]
    fn test_can_be_id_consistent_with_is_id() {
        let id = Value::Id(raw::fresh());
        assert!(is_id(&id));
        assert!(can_be_id(&id));
    }

    #[test]
    fn test_is_id() {
        assert!(is_id(&Value::Id(raw::fresh())));
        assert!(!is_id(&Value::from("507f1f77bcf86cd799439011")));
        assert!(!is_id(&Value::Null));
    }

    #[test]
    fn test_is_same_id_equal_values() {
        let id = raw::fresh();
        assert!(is_same_id(&Value::Id(id), &Value::Id(id)));
    }

    #[test]
    fn test_is_same_id_distinct_values() {
        assert!(!is_same_id(&Value::Id(raw::fresh()), &Value::Id(raw::fresh())));
    }

    #[test]
    fn test_is_same_id_non_id_operands() {
        let id = raw::fresh();
        let hex = Value::from(raw::hex_of(&id));
        // Hex text of the same id is still not an id instance.
        assert!(!is_same_id(&Value::Id(id), &hex));
        assert!(!is_same_id(&hex, &hex));
        assert!(!is_same_id(&Value::Null, &Value::Null));
    }
}
