use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use genai_json_mapper::{BackendConfig, Direction, Entity};
use serde::Deserialize;
use serde_json::Value;

pub const SCENARIOS: &[(&str, usize)] = &[("operations", 6), ("batches", 7), ("caches", 5)];

#[derive(Debug, Clone, Deserialize)]
pub struct MapperCase {
    pub name: String,
    pub entity: Entity,
    pub direction: Direction,
    /// Key into `backends.toml`; defaults to the direction's backend.
    #[serde(default)]
    pub backend: Option<String>,
    pub input: Value,
    #[serde(default)]
    pub expected: Option<Value>,
    /// Display text of the expected error.
    #[serde(default)]
    pub error: Option<String>,
}

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

pub fn read_text(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("failed to read {:?}: {e}", path))
}

pub fn load_backends() -> HashMap<String, BackendConfig> {
    let path = fixtures_dir().join("backends.toml");
    toml::from_str(&read_text(&path)).unwrap_or_else(|e| panic!("failed to parse {:?}: {e}", path))
}

pub fn load_cases(scenario: &str) -> Vec<MapperCase> {
    let path = fixtures_dir().join(format!("{scenario}.json"));
    serde_json::from_str(&read_text(&path)).unwrap_or_else(|e| panic!("failed to parse {:?}: {e}", path))
}

/// Backend a case runs against: its named entry, else the one its
/// direction targets.
pub fn backend_for(case: &MapperCase, backends: &HashMap<String, BackendConfig>) -> BackendConfig {
    let key = match &case.backend {
        Some(key) => key.as_str(),
        None => match case.direction.backend() {
            genai_json_mapper::Backend::Mldev => "gemini",
            genai_json_mapper::Backend::Vertex => "vertex",
        },
    };
    backends
        .get(key)
        .cloned()
        .unwrap_or_else(|| panic!("{}: unknown backend {key:?}", case.name))
}
