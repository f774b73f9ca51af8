//! crates/logr/src/kv.rs
//! Encoding of flat key-value lists onto sink events.

use logr_sink::Event;
use serde::Serialize;
use serde_json::Value;

/// Field carrying the diagnostic for malformed key-value lists.
pub const DIAGNOSTIC_FIELD: &str = "zerologr-err";
/// Field holding the raw list when its length is odd.
pub const ARGS_FIELD: &str = "args";
/// Field holding the first key that is not a string.
pub const INVALID_KEY_FIELD: &str = "invalid key";

/// Caller mistakes detected while encoding a key-value list.
///
/// These never reach the caller; they are attached to the record under
/// [`DIAGNOSTIC_FIELD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum KvError {
    /// The list has an odd number of elements.
    #[error("odd number of arguments passed as key-value pairs for logging")]
    OddArity,
    /// A key is not a string.
    #[error("non-string key argument passed to logging, ignoring all later arguments")]
    NonStringKey,
}

/// Attaches the alternating `[key, value, ...]` list `pairs` to `event`.
///
/// Each pair becomes an independent field; duplicates are kept. Malformed
/// lists degrade instead of failing:
///
/// - odd length: the whole list goes under [`ARGS_FIELD`] together with a
///   diagnostic and a stack trace, and no pair is encoded;
/// - a non-string key: pairs before it stay, the key goes under
///   [`INVALID_KEY_FIELD`] with a diagnostic and a stack trace, and the rest
///   of the list is dropped.
pub fn encode_fields(event: &mut Event<'_>, pairs: &[Value]) {
    if pairs.len() % 2 != 0 {
        event
            .value(ARGS_FIELD, Value::Array(pairs.to_vec()))
            .an_err(DIAGNOSTIC_FIELD, &KvError::OddArity)
            .stack();
        return;
    }

    for pair in pairs.chunks_exact(2) {
        let Value::String(key) = &pair[0] else {
            event
                .value(INVALID_KEY_FIELD, pair[0].clone())
                .an_err(DIAGNOSTIC_FIELD, &KvError::NonStringKey)
                .stack();
            return;
        };
        event.value(key, pair[1].clone());
    }
}

/// Converts any serializable value into a field value.
///
/// Values serde_json cannot represent (such as maps with non-string keys)
/// become a string describing the failure. Non-finite floats serialize
/// without error and become `null`.
pub fn to_value<T>(value: &T) -> Value
where
    T: Serialize + ?Sized,
{
    serde_json::to_value(value).unwrap_or_else(|err| Value::String(format!("!ERROR: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use logr_sink::{Level, MemorySink, Record, STACK_FIELD};
    use serde_json::json;
    use std::collections::BTreeMap;

    fn encode(pairs: &[Value]) -> Record {
        let sink = MemorySink::new();
        let mut event = Event::new(&sink, Level::Info);
        encode_fields(&mut event, pairs);
        event.msg("encoded");
        sink.drain().remove(0)
    }

    #[test]
    fn even_list_becomes_fields_in_order() {
        let record = encode(&[json!("a"), json!(1), json!("b"), json!({"x": true})]);
        let keys: Vec<&str> = record.fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(record.field("a"), Some(&json!(1)));
        assert_eq!(record.field("b"), Some(&json!({"x": true})));
    }

    #[test]
    fn empty_list_adds_nothing() {
        assert!(encode(&[]).fields.is_empty());
    }

    #[test]
    fn duplicate_keys_are_not_merged() {
        let record = encode(&[json!("k"), json!(1), json!("k"), json!(2)]);
        assert_eq!(record.fields_named("k").count(), 2);
        assert_eq!(record.last_field("k"), Some(&json!(2)));
    }

    #[test]
    fn odd_list_is_dumped_under_args() {
        let record = encode(&[json!("k1"), json!(1), json!("k2")]);
        assert_eq!(record.field(ARGS_FIELD), Some(&json!(["k1", 1, "k2"])));
        assert_eq!(
            record.field(DIAGNOSTIC_FIELD),
            Some(&json!(
                "odd number of arguments passed as key-value pairs for logging"
            ))
        );
        assert!(record.has_field(STACK_FIELD));
        assert!(!record.has_field("k1"));
        assert!(!record.has_field("k2"));
    }

    #[test]
    fn non_string_key_stops_encoding() {
        let record = encode(&[json!(42), json!("v"), json!("k2"), json!("v2")]);
        assert_eq!(record.field(INVALID_KEY_FIELD), Some(&json!(42)));
        assert_eq!(
            record.field(DIAGNOSTIC_FIELD),
            Some(&json!(
                "non-string key argument passed to logging, ignoring all later arguments"
            ))
        );
        assert!(record.has_field(STACK_FIELD));
        assert!(!record.has_field("k2"));
    }

    #[test]
    fn pairs_before_bad_key_are_kept() {
        let record = encode(&[json!("ok"), json!(1), json!(null), json!(2), json!("late"), json!(3)]);
        assert_eq!(record.field("ok"), Some(&json!(1)));
        assert_eq!(record.field(INVALID_KEY_FIELD), Some(&Value::Null));
        assert!(!record.has_field("late"));
    }

    #[test]
    fn to_value_serializes_plain_values() {
        assert_eq!(to_value(&3_u8), json!(3));
        assert_eq!(to_value("text"), json!("text"));
        assert_eq!(to_value(&vec![1, 2]), json!([1, 2]));
    }

    #[test]
    fn to_value_reports_unrepresentable_values() {
        let mut map = BTreeMap::new();
        map.insert(vec![1_u8], "bytes key");
        let value = to_value(&map);
        assert!(value.as_str().is_some_and(|s| s.starts_with("!ERROR: ")));
    }

    #[test]
    fn to_value_maps_non_finite_floats_to_null() {
        assert_eq!(to_value(&f64::NAN), Value::Null);
        assert_eq!(to_value(&f64::INFINITY), Value::Null);
        assert_eq!(to_value(&1.5_f64), json!(1.5));
    }
}
