//! Helpers over the generic value model.
//!
//! The engine works on `serde_json::Value` with the `preserve_order`
//! feature: a closed sum of null, boolean, number, string, ordered array,
//! and ordered object. Source records and auxiliary snapshots are handed
//! to the renderer in this shape; anything else is a collaborator bug.

use serde_json::Value;

/// Walk a context one path segment at a time.
///
/// Every intermediate value must be an object and every key must exist,
/// otherwise the walk fails and `None` is returned. An empty path yields
/// the context unchanged. A missing key is not an error: partial source
/// records are expected, and the renderer turns `None` into omission.
pub fn walk_path<'a>(context: &'a Value, path: &[String]) -> Option<&'a Value> {
    let mut current = context;
    for key in path {
        current = current.as_object()?.get(key)?;
    }
    Some(current)
}

/// Truncate a value to `limit` elements when it is an array.
///
/// Non-array values pass through unchanged; order is preserved and the
/// kept elements are always a prefix of the original.
pub fn truncate_list(value: Value, limit: Option<usize>) -> Value {
    match (value, limit) {
        (Value::Array(mut items), Some(cap)) => {
            items.truncate(cap);
            Value::Array(items)
        }
        (other, _) => other,
    }
}
