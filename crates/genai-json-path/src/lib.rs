//! Path-addressed access to JSON trees.
//!
//! This crate implements the primitives that request and response converters
//! compose to translate a `serde_json::Value` between two wire shapes:
//! reading, writing with container creation, moving with removal, and the
//! zero-value check that decides whether a field is worth copying at all.
//!
//! Paths are a closed [`Segment`] enum: an object key or a wildcard. A
//! wildcard fans out over every element of an array (or every member of an
//! object); a literal key met on an array is applied to each element.
//!
//! # Example
//!
//! ```
//! use genai_json_path::{get_value_by_path, is_zero, set_value_by_path, Path};
//! use serde_json::json;
//!
//! let source = json!({"gcsUri": "gs://bucket/video.mp4", "mimeType": ""});
//! let mut target = json!({});
//!
//! let uri = get_value_by_path(&source, &Path::from_keys(&["gcsUri"])).unwrap();
//! assert!(!is_zero(uri.as_ref()));
//! set_value_by_path(&mut target, &Path::from_keys(&["video", "uri"]), uri.unwrap()).unwrap();
//!
//! let mime = get_value_by_path(&source, &Path::from_keys(&["mimeType"])).unwrap();
//! assert!(is_zero(mime.as_ref()));
//!
//! assert_eq!(target, json!({"video": {"uri": "gs://bucket/video.mp4"}}));
//! ```

use thiserror::Error;

pub mod types;
pub use types::{Path, Segment, SELF_KEY};

pub mod validate;
pub use validate::{validate_path, MAX_PATH_LENGTH};

mod get;
pub use get::{get_value_by_path, has_value_by_path};

mod set;
pub use set::set_value_by_path;

mod move_value;
pub use move_value::{move_value_by_path, move_value_by_str_paths};

mod zero;
pub use zero::is_zero;

/// Structural errors. Routine absence is never an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path is empty")]
    EmptyPath,
    #[error("path has {0} segments, more than allowed")]
    PathTooLong(usize),
    #[error("tree is null")]
    NullTree,
    #[error("cannot write `{0}`: a scalar is in the way")]
    NotContainer(String),
    #[error("invalid path syntax: `{0}`")]
    InvalidSyntax(String),
    #[error("move `{from}` -> `{to}` must share the prefix up to the wildcard")]
    MismatchedMovePrefix { from: String, to: String },
}
