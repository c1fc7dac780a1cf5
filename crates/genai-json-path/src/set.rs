use serde_json::{Map, Value};

use crate::types::{Path, Segment};
use crate::validate::validate_path;
use crate::PathError;

/// Write `value` at `path`, creating missing intermediate objects.
///
/// The terminal key is overwritten. When the walk meets a wildcard, or a
/// literal key on an array, the rest of the path is written into every
/// element: an array `value` with one item per element is paired up
/// positionally, anything else is copied into each element.
///
/// # Errors
///
/// - `EmptyPath`/`PathTooLong` for invalid paths
/// - `NullTree` when `tree` is `null`
/// - `NotContainer` when the walk has to pass through an existing scalar
///
/// A wildcard over a missing or `null` member writes nothing: no container
/// is created for it, so no object ends up where an array was expected.
///
/// # Example
///
/// ```
/// use genai_json_path::{set_value_by_path, Path};
/// use serde_json::json;
///
/// let mut doc = json!({});
/// set_value_by_path(&mut doc, &Path::from_keys(&["_url", "name"]), json!("ops/1")).unwrap();
/// assert_eq!(doc, json!({"_url": {"name": "ops/1"}}));
///
/// let mut doc = json!({"items": [{}, {}]});
/// set_value_by_path(&mut doc, &Path::parse("items[].n").unwrap(), json!([1, 2])).unwrap();
/// assert_eq!(doc, json!({"items": [{"n": 1}, {"n": 2}]}));
/// ```
pub fn set_value_by_path(tree: &mut Value, path: &Path, value: Value) -> Result<(), PathError> {
    validate_path(path)?;
    if tree.is_null() {
        return Err(PathError::NullTree);
    }
    assign(tree, path.segments(), value, path)
}

fn assign(
    current: &mut Value,
    segments: &[Segment],
    value: Value,
    path: &Path,
) -> Result<(), PathError> {
    let Some((segment, rest)) = segments.split_first() else {
        *current = value;
        return Ok(());
    };
    if current.is_null() {
        if segment.is_wildcard() {
            return Ok(());
        }
        *current = Value::Object(Map::new());
    }
    match (segment, current) {
        (Segment::Key(key), Value::Object(map)) => {
            // A broadcast over a missing or null member has no elements.
            if rest.first().is_some_and(Segment::is_wildcard)
                && map.get(key).map_or(true, Value::is_null)
            {
                return Ok(());
            }
            let child = map.entry(key.clone()).or_insert(Value::Null);
            assign(child, rest, value, path)
        }
        (Segment::Key(_), Value::Array(items)) => spread(items.iter_mut().collect(), segments, value, path),
        (Segment::Wildcard, Value::Array(items)) => spread(items.iter_mut().collect(), rest, value, path),
        (Segment::Wildcard, Value::Object(map)) => spread(map.values_mut().collect(), rest, value, path),
        (_, _) => Err(PathError::NotContainer(path.to_string())),
    }
}

fn spread(
    targets: Vec<&mut Value>,
    segments: &[Segment],
    value: Value,
    path: &Path,
) -> Result<(), PathError> {
    match value {
        Value::Array(values) if values.len() == targets.len() => {
            for (target, v) in targets.into_iter().zip(values) {
                assign(target, segments, v, path)?;
            }
        }
        value => {
            for target in targets {
                assign(target, segments, value.clone(), path)?;
            }
        }
    }
    Ok(())
}
