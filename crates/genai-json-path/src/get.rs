use serde_json::Value;

use crate::types::{Path, Segment};
use crate::validate::validate_path;
use crate::PathError;

/// Read the value addressed by `path`.
///
/// Returns `Ok(None)` when nothing lives there. A literal key met on an array
/// is applied to every element, and a wildcard fans out over array elements
/// or object member values; both collect their results into a new array.
/// Inside that array an absent branch reads as `null` so positions line up
/// with the source. When every branch of a non-empty broadcast is absent
/// the whole result is `None` rather than an array of `null`s, so callers
/// that skip absent fields do not copy an all-`null` array.
///
/// # Errors
///
/// Only for degenerate input: an empty or overlong path, or a `null` tree.
///
/// # Example
///
/// ```
/// use genai_json_path::{get_value_by_path, Path};
/// use serde_json::json;
///
/// let doc = json!({"items": [{"n": 1}, {"n": 2}]});
/// let val = get_value_by_path(&doc, &Path::from_keys(&["items", "n"])).unwrap();
/// assert_eq!(val, Some(json!([1, 2])));
///
/// let missing = get_value_by_path(&json!({}), &Path::from_keys(&["a", "b"])).unwrap();
/// assert_eq!(missing, None);
/// ```
pub fn get_value_by_path(tree: &Value, path: &Path) -> Result<Option<Value>, PathError> {
    validate_path(path)?;
    if tree.is_null() {
        return Err(PathError::NullTree);
    }
    if path.is_self() {
        return Ok(Some(tree.clone()));
    }
    Ok(resolve(tree, path.segments()))
}

/// Check whether anything lives at `path`. A present `null` counts.
pub fn has_value_by_path(tree: &Value, path: &Path) -> Result<bool, PathError> {
    get_value_by_path(tree, path).map(|v| v.is_some())
}

fn resolve(current: &Value, segments: &[Segment]) -> Option<Value> {
    let Some((segment, rest)) = segments.split_first() else {
        return Some(current.clone());
    };
    match (segment, current) {
        (Segment::Key(key), Value::Object(map)) => resolve(map.get(key)?, rest),
        // Pass-through: the same key is looked up in every element.
        (Segment::Key(_), Value::Array(items)) => broadcast(items.iter(), segments),
        (Segment::Wildcard, Value::Array(items)) => broadcast(items.iter(), rest),
        (Segment::Wildcard, Value::Object(map)) => broadcast(map.values(), rest),
        _ => None,
    }
}

fn broadcast<'a>(items: impl Iterator<Item = &'a Value>, segments: &[Segment]) -> Option<Value> {
    let results: Vec<Option<Value>> = items.map(|item| resolve(item, segments)).collect();
    if !results.is_empty() && results.iter().all(Option::is_none) {
        return None;
    }
    Some(Value::Array(
        results
            .into_iter()
            .map(|r| r.unwrap_or(Value::Null))
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn get(doc: &Value, path: &str) -> Option<Value> {
        get_value_by_path(doc, &Path::parse(path).unwrap()).unwrap()
    }

    #[test]
    fn test_get_object_key() {
        let doc = json!({"foo": "bar"});
        assert_eq!(get(&doc, "foo"), Some(json!("bar")));
        assert_eq!(get(&doc, "missing"), None);
    }

    #[test]
    fn test_get_nested() {
        let doc = json!({"foo": {"bar": {"baz": "qux"}}});
        assert_eq!(get(&doc, "foo.bar.baz"), Some(json!("qux")));
        assert_eq!(get(&doc, "foo.bar.nope"), None);
    }

    #[test]
    fn test_get_explicit_null_is_present() {
        let doc = json!({"foo": null});
        assert_eq!(get(&doc, "foo"), Some(Value::Null));
    }

    #[test]
    fn test_get_through_scalar_is_absent() {
        let doc = json!({"a": 123});
        assert_eq!(get(&doc, "a.b"), None);
        assert_eq!(get(&doc, "a[]"), None);
    }

    #[test]
    fn test_get_array_pass_through() {
        let doc = json!({"items": [{"n": 1}, {"n": 2}]});
        assert_eq!(get(&doc, "items.n"), Some(json!([1, 2])));
    }

    #[test]
    fn test_get_wildcard_over_array() {
        let doc = json!({"items": [{"n": 1}, {"m": 2}, {"n": 3}]});
        assert_eq!(get(&doc, "items[].n"), Some(json!([1, null, 3])));
        assert_eq!(get(&doc, "items[].x"), None);
    }

    #[test]
    fn test_get_wildcard_over_object_keeps_insertion_order() {
        let doc = json!({"m": {"z": {"v": 1}, "a": {"v": 2}}});
        assert_eq!(get(&doc, "m.*.v"), Some(json!([1, 2])));
    }

    #[test]
    fn test_get_wildcard_over_empty_array() {
        let doc = json!({"items": []});
        assert_eq!(get(&doc, "items[].n"), Some(json!([])));
    }

    #[test]
    fn test_get_nested_wildcards() {
        let doc = json!({"a": [{"b": [{"c": 1}, {"c": 2}]}, {"b": [{"c": 3}]}]});
        assert_eq!(get(&doc, "a[].b[].c"), Some(json!([[1, 2], [3]])));
    }

    #[test]
    fn test_get_self() {
        let doc = json!({"gcsUri": "gs://x"});
        assert_eq!(get(&doc, "_self"), Some(doc.clone()));
    }

    #[test]
    fn test_get_degenerate_input() {
        assert_eq!(
            get_value_by_path(&Value::Null, &Path::from_keys(&["a"])),
            Err(PathError::NullTree)
        );
        assert_eq!(
            get_value_by_path(&json!({}), &Path::default()),
            Err(PathError::EmptyPath)
        );
    }

    #[test]
    fn test_has_value() {
        let doc = json!({"a": null});
        assert!(has_value_by_path(&doc, &Path::from_keys(&["a"])).unwrap());
        assert!(!has_value_by_path(&doc, &Path::from_keys(&["b"])).unwrap());
    }
}
