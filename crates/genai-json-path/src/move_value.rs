//! Structural relocation of values inside one tree.
//!
//! A move is a `(source, destination)` pair of patterns. Their longest shared
//! prefix is the *anchor*: it is resolved once against the tree and every
//! element it reaches is rewritten on its own. Below the anchor the source
//! either names a single value (`a.b` -> `a.c`) or ends in a bare `*`, which
//! takes every key currently present in the element (`requests[].*` ->
//! `requests[].request.*`).

use serde_json::Value;

use crate::set::set_value_by_path;
use crate::types::{Path, Segment};
use crate::validate::validate_path;
use crate::PathError;

/// Relocate values according to `moves`, applied in order.
///
/// Each matched element is rewritten on a copy and committed only after all
/// of its keys were placed, so an error leaves that element untouched (and
/// keeps the elements already processed).
///
/// # Errors
///
/// - `NullTree` when `tree` is `null`
/// - `EmptyPath`/`PathTooLong` for invalid patterns
/// - `MismatchedMovePrefix` when a wildcard is not covered by the shared
///   anchor (other than the terminal `*` of a key spread)
/// - `NotContainer` when a destination has to pass through a scalar
///
/// # Example
///
/// ```
/// use genai_json_path::{move_value_by_path, Path};
/// use serde_json::json;
///
/// let mut doc = json!({"requests": [{"content": "v1"}, {"content": "v2"}]});
/// let moves = [(
///     Path::parse("requests[].*").unwrap(),
///     Path::parse("requests[].request.*").unwrap(),
/// )];
/// move_value_by_path(&mut doc, &moves).unwrap();
/// assert_eq!(
///     doc,
///     json!({"requests": [
///         {"request": {"content": "v1"}},
///         {"request": {"content": "v2"}}
///     ]})
/// );
/// ```
pub fn move_value_by_path(tree: &mut Value, moves: &[(Path, Path)]) -> Result<(), PathError> {
    if tree.is_null() {
        return Err(PathError::NullTree);
    }
    for (source, dest) in moves {
        validate_path(source)?;
        validate_path(dest)?;
        if source == dest {
            continue;
        }
        let plan = MovePlan::new(source, dest)?;
        tracing::trace!(%source, %dest, "moving values");
        relocate(tree, &source.segments()[..plan.anchor], &plan)?;
    }
    Ok(())
}

/// Parse `(source, destination)` string pairs and move.
pub fn move_value_by_str_paths(tree: &mut Value, moves: &[(&str, &str)]) -> Result<(), PathError> {
    let parsed = moves
        .iter()
        .map(|(s, d)| Ok((Path::parse(s)?, Path::parse(d)?)))
        .collect::<Result<Vec<_>, PathError>>()?;
    move_value_by_path(tree, &parsed)
}

struct MovePlan<'a> {
    anchor: usize,
    source_rest: &'a [Segment],
    dest_rest: &'a [Segment],
    spread: bool,
}

impl<'a> MovePlan<'a> {
    fn new(source: &'a Path, dest: &'a Path) -> Result<Self, PathError> {
        let anchor = source
            .common_prefix_len(dest)
            .min(source.len() - 1)
            .min(dest.len() - 1);
        let source_rest = &source.segments()[anchor..];
        let dest_rest = &dest.segments()[anchor..];
        let mismatch = || PathError::MismatchedMovePrefix {
            from: source.to_string(),
            to: dest.to_string(),
        };

        let spread = matches!(source_rest, [Segment::Wildcard]);
        if spread {
            let Some((last, parents)) = dest_rest.split_last() else {
                return Err(mismatch());
            };
            if !last.is_wildcard() || parents.iter().any(Segment::is_wildcard) {
                return Err(mismatch());
            }
        } else if source_rest.iter().chain(dest_rest).any(Segment::is_wildcard) {
            return Err(mismatch());
        }

        Ok(Self {
            anchor,
            source_rest,
            dest_rest,
            spread,
        })
    }

    /// Keys the destination passes through; a spread never moves these.
    fn is_kept(&self, key: &str) -> bool {
        key.starts_with('_') || self.dest_rest.iter().any(|s| s.as_key() == Some(key))
    }

    fn dest_for(&self, key: &str) -> Path {
        let mut segments = self.dest_rest.to_vec();
        if let Some(last) = segments.last_mut() {
            *last = Segment::key(key);
        }
        Path::new(segments)
    }
}

fn relocate(current: &mut Value, anchor: &[Segment], plan: &MovePlan<'_>) -> Result<(), PathError> {
    let Some((segment, rest)) = anchor.split_first() else {
        return apply(current, plan);
    };
    match (segment, current) {
        (Segment::Key(key), Value::Object(map)) => match map.get_mut(key) {
            Some(child) => relocate(child, rest, plan),
            None => Ok(()),
        },
        (Segment::Key(_), Value::Array(items)) => {
            for item in items {
                relocate(item, anchor, plan)?;
            }
            Ok(())
        }
        (Segment::Wildcard, Value::Array(items)) => {
            for item in items {
                relocate(item, rest, plan)?;
            }
            Ok(())
        }
        (Segment::Wildcard, Value::Object(map)) => {
            for item in map.values_mut() {
                relocate(item, rest, plan)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

fn apply(element: &mut Value, plan: &MovePlan<'_>) -> Result<(), PathError> {
    let Some(map) = element.as_object() else {
        return Ok(());
    };
    if plan.spread {
        let keys: Vec<String> = map.keys().filter(|k| !plan.is_kept(k)).cloned().collect();
        if keys.is_empty() {
            return Ok(());
        }
        let mut staged = element.clone();
        spread_keys(&mut staged, &keys, plan)?;
        *element = staged;
    } else {
        let mut staged = element.clone();
        if move_single(&mut staged, plan)? {
            *element = staged;
        }
    }
    Ok(())
}

fn spread_keys(staged: &mut Value, keys: &[String], plan: &MovePlan<'_>) -> Result<(), PathError> {
    let Some(map) = staged.as_object_mut() else {
        return Ok(());
    };
    let taken: Vec<(String, Value)> = keys
        .iter()
        .filter_map(|k| map.shift_remove(k).map(|v| (k.clone(), v)))
        .collect();
    for (key, value) in taken {
        tracing::trace!(key = %key, "relocating key");
        set_value_by_path(staged, &plan.dest_for(&key), value)?;
    }
    Ok(())
}

fn move_single(staged: &mut Value, plan: &MovePlan<'_>) -> Result<bool, PathError> {
    let Some(value) = take(staged, plan.source_rest) else {
        return Ok(false);
    };
    set_value_by_path(staged, &Path::new(plan.dest_rest.to_vec()), value)?;
    Ok(true)
}

fn take(current: &mut Value, segments: &[Segment]) -> Option<Value> {
    let (last, parents) = segments.split_last()?;
    let mut current = current;
    for segment in parents {
        current = current.as_object_mut()?.get_mut(segment.as_key()?)?;
    }
    current.as_object_mut()?.shift_remove(last.as_key()?)
}
