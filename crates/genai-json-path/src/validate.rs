//! Validation of paths handed to the engine.

use crate::types::Path;
use crate::PathError;

/// Maximum allowed path depth.
pub const MAX_PATH_LENGTH: usize = 64;

/// Validate a path before it is resolved against a tree.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no segments
/// - The path exceeds the maximum depth (64 segments)
///
/// # Example
///
/// ```
/// use genai_json_path::{validate_path, Path};
///
/// validate_path(&Path::from_keys(&["foo", "bar"])).unwrap();
/// validate_path(&Path::default()).unwrap_err();
/// ```
pub fn validate_path(path: &Path) -> Result<(), PathError> {
    if path.is_empty() {
        return Err(PathError::EmptyPath);
    }
    if path.len() > MAX_PATH_LENGTH {
        return Err(PathError::PathTooLong(path.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Segment;

    #[test]
    fn test_validate_empty_path() {
        assert_eq!(validate_path(&Path::default()), Err(PathError::EmptyPath));
    }

    #[test]
    fn test_validate_short_path() {
        assert!(validate_path(&Path::from_keys(&["foo", "bar"])).is_ok());
    }

    #[test]
    fn test_validate_long_path() {
        let path = Path::new(vec![Segment::Wildcard; 65]);
        assert_eq!(validate_path(&path), Err(PathError::PathTooLong(65)));
    }

    #[test]
    fn test_validate_max_length_path() {
        let path = Path::new(vec![Segment::Wildcard; MAX_PATH_LENGTH]);
        assert!(validate_path(&path).is_ok());
    }
}
