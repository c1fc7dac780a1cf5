//! Value transformers applied by [`Rule::Transform`](crate::Rule::Transform).

use serde_json::Value;

use crate::config::BackendConfig;
use crate::error::MapError;

/// The closed set of value transformations a table can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Base64 payloads pass through untouched.
    Bytes,
    /// Model id to the backend's model resource name.
    Model,
    /// Model name as the caches endpoint expects it.
    CachesModel,
    /// Cached content id to its full resource name.
    CachedContentName,
    /// Gemini batch states to the shared job-state enum.
    JobState,
}

impl Transform {
    pub fn apply(self, value: &Value, config: &BackendConfig) -> Result<Value, MapError> {
        match self {
            Transform::Bytes => t_bytes(value),
            Transform::Model => Ok(Value::String(t_model(config, as_str(value, "model")?)?)),
            Transform::CachesModel => Ok(Value::String(t_caches_model(
                config,
                as_str(value, "model")?,
            )?)),
            Transform::CachedContentName => Ok(Value::String(get_resource_name(
                config,
                as_str(value, "name")?,
                "cachedContents",
            )?)),
            Transform::JobState => Ok(Value::String(
                t_job_state(as_str(value, "state")?).to_string(),
            )),
        }
    }
}

fn as_str<'a>(value: &'a Value, field: &str) -> Result<&'a str, MapError> {
    value
        .as_str()
        .ok_or_else(|| MapError::invalid(field, format!("expected a string, got {value}")))
}

/// Bytes travel as base64 strings in both wire shapes.
pub fn t_bytes(value: &Value) -> Result<Value, MapError> {
    match value {
        Value::String(_) => Ok(value.clone()),
        other => Err(MapError::invalid(
            "bytes",
            format!("expected a base64 string, got {other}"),
        )),
    }
}

/// Normalise a model id.
///
/// Vertex: `projects/…`, `models/…` and `publishers/…` are kept, `owner/id`
/// becomes `publishers/owner/models/id`, a bare id becomes
/// `publishers/google/models/id`. Gemini: `models/…` and `tunedModels/…` are
/// kept, a bare id becomes `models/id`.
pub fn t_model(config: &BackendConfig, model: &str) -> Result<String, MapError> {
    if model.is_empty() {
        return Err(MapError::invalid("model", "model is required"));
    }
    if config.is_vertex() {
        if ["projects/", "models/", "publishers/"]
            .iter()
            .any(|p| model.starts_with(p))
        {
            return Ok(model.to_string());
        }
        if let Some((publisher, id)) = model.split_once('/') {
            return Ok(format!("publishers/{publisher}/models/{id}"));
        }
        return Ok(format!("publishers/google/models/{model}"));
    }
    if model.starts_with("models/") || model.starts_with("tunedModels/") {
        return Ok(model.to_string());
    }
    Ok(format!("models/{model}"))
}

/// Model name for cached content; Vertex wants it fully qualified.
pub fn t_caches_model(config: &BackendConfig, model: &str) -> Result<String, MapError> {
    let model = t_model(config, model)?;
    if !config.is_vertex() {
        return Ok(model);
    }
    let (project, location) = (config.project()?, config.location()?);
    if model.starts_with("publishers/") {
        return Ok(format!("projects/{project}/locations/{location}/{model}"));
    }
    if model.starts_with("models/") {
        return Ok(format!(
            "projects/{project}/locations/{location}/publishers/google/{model}"
        ));
    }
    Ok(model)
}

/// Expand a short resource name for `collection`.
///
/// ```
/// use genai_json_mapper::{get_resource_name, BackendConfig};
///
/// let vertex = BackendConfig::vertex("p", "l");
/// assert_eq!(
///     get_resource_name(&vertex, "123", "cachedContents").unwrap(),
///     "projects/p/locations/l/cachedContents/123"
/// );
/// let gemini = BackendConfig::gemini();
/// assert_eq!(
///     get_resource_name(&gemini, "123", "cachedContents").unwrap(),
///     "cachedContents/123"
/// );
/// ```
pub fn get_resource_name(
    config: &BackendConfig,
    name: &str,
    collection: &str,
) -> Result<String, MapError> {
    let prefix = format!("{collection}/");
    if config.is_vertex() {
        if name.starts_with("projects/") {
            return Ok(name.to_string());
        }
        let project = config.project()?;
        if name.starts_with("locations/") {
            return Ok(format!("projects/{project}/{name}"));
        }
        let location = config.location()?;
        if name.starts_with(&prefix) {
            return Ok(format!("projects/{project}/locations/{location}/{name}"));
        }
        return Ok(format!(
            "projects/{project}/locations/{location}/{prefix}{name}"
        ));
    }
    if name.starts_with(&prefix) {
        return Ok(name.to_string());
    }
    Ok(format!("{prefix}{name}"))
}

/// Collection used when listing models. `base_models` absent or `true`
/// lists the publisher models.
pub fn t_models_url(config: &BackendConfig, base_models: Option<&Value>) -> &'static str {
    let base = base_models.and_then(Value::as_bool).unwrap_or(true);
    match (config.is_vertex(), base) {
        (true, true) => "publishers/google/models",
        (true, false) => "models",
        (false, true) => "models",
        (false, false) => "tunedModels",
    }
}

/// Map `BATCH_STATE_*` to `JOB_STATE_*`; other values pass through.
pub fn t_job_state(state: &str) -> &str {
    match state {
        "BATCH_STATE_UNSPECIFIED" => "JOB_STATE_UNSPECIFIED",
        "BATCH_STATE_PENDING" => "JOB_STATE_PENDING",
        "BATCH_STATE_RUNNING" => "JOB_STATE_RUNNING",
        "BATCH_STATE_SUCCEEDED" => "JOB_STATE_SUCCEEDED",
        "BATCH_STATE_FAILED" => "JOB_STATE_FAILED",
        "BATCH_STATE_CANCELLED" => "JOB_STATE_CANCELLED",
        "BATCH_STATE_EXPIRED" => "JOB_STATE_EXPIRED",
        other => other,
    }
}
