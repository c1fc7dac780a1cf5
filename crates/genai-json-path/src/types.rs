//! Path and segment types.

use std::fmt;
use std::str::FromStr;

use crate::PathError;

/// Key that addresses the tree itself when it is the only segment of a
/// read path.
pub const SELF_KEY: &str = "_self";

/// One step of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Object member access by name.
    Key(String),
    /// Every element of an array, or every member value of an object.
    Wildcard,
}

impl Segment {
    pub fn key(name: impl Into<String>) -> Self {
        Segment::Key(name.into())
    }

    pub fn as_key(&self) -> Option<&str> {
        match self {
            Segment::Key(k) => Some(k),
            Segment::Wildcard => None,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard)
    }
}

/// An immutable address into a JSON tree.
///
/// Paths are usually built once per call site, either from plain keys or
/// from the dotted notation used by mapping tables:
///
/// ```
/// use genai_json_path::{Path, Segment};
///
/// let p = Path::parse("requests[].request.*").unwrap();
/// assert_eq!(
///     p.segments(),
///     &[
///         Segment::key("requests"),
///         Segment::Wildcard,
///         Segment::key("request"),
///         Segment::Wildcard,
///     ]
/// );
/// assert_eq!(p.to_string(), "requests[].request.*");
///
/// let q = Path::from_keys(&["_url", "operationName"]);
/// assert_eq!(q.to_string(), "_url.operationName");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Build a wildcard-free path from object keys.
    pub fn from_keys(keys: &[&str]) -> Self {
        Self {
            segments: keys.iter().map(|k| Segment::key(*k)).collect(),
        }
    }

    /// Parse the dotted notation.
    ///
    /// - `a.b` is two keys
    /// - `a[]` is the key `a` followed by a wildcard over its elements
    /// - `*` is a wildcard
    ///
    /// # Errors
    ///
    /// `EmptyPath` for an empty string, `InvalidSyntax` for empty components
    /// or brackets anywhere other than a trailing `[]`.
    pub fn parse(input: &str) -> Result<Self, PathError> {
        if input.is_empty() {
            return Err(PathError::EmptyPath);
        }
        let mut segments = Vec::new();
        for component in input.split('.') {
            if component == "*" {
                segments.push(Segment::Wildcard);
                continue;
            }
            let (name, broadcast) = match component.strip_suffix("[]") {
                Some(name) => (name, true),
                None => (component, false),
            };
            if name.is_empty() || name.contains(['[', ']', '*']) {
                return Err(PathError::InvalidSyntax(input.to_string()));
            }
            segments.push(Segment::key(name));
            if broadcast {
                segments.push(Segment::Wildcard);
            }
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn has_wildcard(&self) -> bool {
        self.segments.iter().any(Segment::is_wildcard)
    }

    /// Whether this path is exactly the [`SELF_KEY`] alias.
    pub fn is_self(&self) -> bool {
        matches!(self.segments.as_slice(), [Segment::Key(k)] if k == SELF_KEY)
    }

    /// Number of leading segments shared with `other`.
    pub fn common_prefix_len(&self, other: &Path) -> usize {
        self.segments
            .iter()
            .zip(other.segments.iter())
            .take_while(|(a, b)| a == b)
            .count()
    }

    /// Check if this path is a strict prefix of `child`.
    pub fn is_parent_of(&self, child: &Path) -> bool {
        self.len() < child.len() && self.common_prefix_len(child) == self.len()
    }

    /// A new path with `key` appended.
    pub fn join(&self, key: impl Into<String>) -> Path {
        let mut segments = self.segments.clone();
        segments.push(Segment::key(key));
        Path { segments }
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Path::new(segments)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let mut iter = self.segments.iter().peekable();
        while let Some(segment) = iter.next() {
            if !first {
                f.write_str(".")?;
            }
            first = false;
            match segment {
                Segment::Key(k) => {
                    f.write_str(k)?;
                    // `key[]` only when more segments follow; a trailing
                    // wildcard prints as `key.*`.
                    let mut ahead = iter.clone();
                    if ahead.next().is_some_and(Segment::is_wildcard) && ahead.next().is_some() {
                        iter.next();
                        f.write_str("[]")?;
                    }
                }
                Segment::Wildcard => f.write_str("*")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys() {
        let p = Path::parse("a.b.c").unwrap();
        assert_eq!(p, Path::from_keys(&["a", "b", "c"]));
        assert!(!p.has_wildcard());
    }

    #[test]
    fn test_parse_array_suffix() {
        let p = Path::parse("items[].n").unwrap();
        assert_eq!(
            p.segments(),
            &[Segment::key("items"), Segment::Wildcard, Segment::key("n")]
        );
        assert!(p.has_wildcard());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(Path::parse(""), Err(PathError::EmptyPath));
        assert!(matches!(Path::parse("a..b"), Err(PathError::InvalidSyntax(_))));
        assert!(matches!(Path::parse("a[0]"), Err(PathError::InvalidSyntax(_))));
        assert!(matches!(Path::parse("[]"), Err(PathError::InvalidSyntax(_))));
        assert!(matches!(Path::parse("a.b*"), Err(PathError::InvalidSyntax(_))));
        assert!(matches!(Path::parse("a."), Err(PathError::InvalidSyntax(_))));
    }

    #[test]
    fn test_display_roundtrip() {
        for input in ["a", "a.b", "requests[].*", "requests[].request.*", "*", "a[].b[].c"] {
            let p = Path::parse(input).unwrap();
            assert_eq!(p.to_string(), input, "display of {input}");
            assert_eq!(Path::parse(&p.to_string()).unwrap(), p);
        }
    }

    #[test]
    fn test_display_key_wildcard_forms() {
        // `a.*` and `a[]` are the same segments.
        assert_eq!(Path::parse("a[]").unwrap().to_string(), "a.*");
        assert_eq!(Path::parse("a.*.b").unwrap().to_string(), "a[].b");
        assert_eq!(Path::parse("a[].*").unwrap().to_string(), "a[].*");
        let err = PathError::MismatchedMovePrefix {
            from: Path::parse("requests[].*").unwrap().to_string(),
            to: Path::parse("requests[].request.*").unwrap().to_string(),
        };
        assert_eq!(
            err.to_string(),
            "move `requests[].*` -> `requests[].request.*` must share the prefix up to the wildcard"
        );
    }

    #[test]
    fn test_common_prefix() {
        let src = Path::parse("requests[].*").unwrap();
        let dst = Path::parse("requests[].request.*").unwrap();
        assert_eq!(src.common_prefix_len(&dst), 2);
        assert!(Path::parse("requests[]").unwrap().is_parent_of(&dst));
        assert!(!dst.is_parent_of(&src));
        assert!(!src.is_parent_of(&src));
    }

    #[test]
    fn test_self_alias() {
        assert!(Path::from_keys(&[SELF_KEY]).is_self());
        assert!(!Path::from_keys(&[SELF_KEY, "x"]).is_self());
    }

    #[test]
    fn test_join() {
        let p = Path::from_keys(&["a"]).join("b");
        assert_eq!(p.to_string(), "a.b");
    }
}
