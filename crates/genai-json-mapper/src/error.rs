use genai_json_path::PathError;
use thiserror::Error;

use crate::types::{Backend, Direction, Entity};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    /// A populated field has no representation on the selected backend.
    #[error("{field} parameter is not supported in {backend}.")]
    Unsupported { field: String, backend: Backend },

    #[error("no mapping for {entity} in direction {direction}")]
    NoMapping { entity: Entity, direction: Direction },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Path(#[from] PathError),
}

impl MapError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        MapError::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
