//! Backend selection and the Vertex project/location pair.

use serde::Deserialize;

use crate::error::MapError;
use crate::types::Backend;

pub const ENV_USE_VERTEXAI: &str = "GOOGLE_GENAI_USE_VERTEXAI";
pub const ENV_PROJECT: &str = "GOOGLE_CLOUD_PROJECT";
pub const ENV_LOCATION: &str = "GOOGLE_CLOUD_LOCATION";

/// Which backend conversions target, plus what resource names need.
///
/// Deserializes from any serde format; every field is optional and the
/// default is the Gemini API.
///
/// ```
/// use genai_json_mapper::{Backend, BackendConfig};
///
/// let config: BackendConfig = serde_json::from_str(
///     r#"{"backend": "vertex", "project": "p", "location": "us-central1"}"#,
/// ).unwrap();
/// assert_eq!(config.backend, Backend::Vertex);
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct BackendConfig {
    #[serde(default)]
    pub backend: Backend,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl BackendConfig {
    pub fn gemini() -> Self {
        Self::default()
    }

    pub fn vertex(project: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            backend: Backend::Vertex,
            project: Some(project.into()),
            location: Some(location.into()),
        }
    }

    /// Read `GOOGLE_GENAI_USE_VERTEXAI`, `GOOGLE_CLOUD_PROJECT` and
    /// `GOOGLE_CLOUD_LOCATION` from the process environment.
    pub fn from_env() -> Result<Self, MapError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, MapError> {
        let use_vertex = lookup(ENV_USE_VERTEXAI)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true"))
            .unwrap_or(false);
        let non_empty = |name: &str| lookup(name).filter(|v| !v.is_empty());
        let config = Self {
            backend: if use_vertex { Backend::Vertex } else { Backend::Mldev },
            project: non_empty(ENV_PROJECT),
            location: non_empty(ENV_LOCATION),
        };
        config.validate()?;
        Ok(config)
    }

    /// Vertex needs both a project and a location.
    pub fn validate(&self) -> Result<(), MapError> {
        if self.is_vertex() {
            self.project()?;
            self.location()?;
        }
        Ok(())
    }

    pub fn is_vertex(&self) -> bool {
        self.backend == Backend::Vertex
    }

    pub fn project(&self) -> Result<&str, MapError> {
        self.project
            .as_deref()
            .ok_or_else(|| MapError::Config("Vertex AI requires a project".to_string()))
    }

    pub fn location(&self) -> Result<&str, MapError> {
        self.location
            .as_deref()
            .ok_or_else(|| MapError::Config("Vertex AI requires a location".to_string()))
    }
}
