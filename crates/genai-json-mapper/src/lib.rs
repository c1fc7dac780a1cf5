//! Declarative conversion of JSON trees between the SDK shape and the Gemini
//! API or Vertex AI wire shapes.
//!
//! Each entity has a [`MappingTable`] per [`Direction`]: an ordered list of
//! [`Rule`]s that [`SchemaMapper`] interprets on top of the path primitives
//! of `genai-json-path`.
//!
//! # Example
//!
//! ```
//! use genai_json_mapper::{BackendConfig, Entity, MapError, SchemaMapper};
//! use serde_json::json;
//!
//! let mapper = SchemaMapper::new(BackendConfig::gemini());
//! let video = mapper
//!     .from_backend(Entity::Video, &json!({"uri": "u", "encoding": "video/mp4"}))
//!     .unwrap();
//! assert_eq!(video, json!({"uri": "u", "mimeType": "video/mp4"}));
//!
//! let err = mapper
//!     .to_backend(Entity::BatchJobSource, &json!({"gcsUri": ["gs://b/in.jsonl"]}))
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "gcsUri parameter is not supported in Gemini API.");
//! assert!(matches!(err, MapError::Unsupported { .. }));
//! ```

pub mod catalog;
pub use catalog::Catalog;

pub mod config;
pub use config::BackendConfig;

mod error;
pub use error::MapError;

mod mapper;
pub use mapper::SchemaMapper;

pub mod request;
pub use request::{prepare_request, PreparedRequest};

pub mod table;
pub use table::{MappingTable, Rule, Target};

pub mod transformers;
pub use transformers::{
    get_resource_name, t_bytes, t_caches_model, t_job_state, t_model, t_models_url, Transform,
};

pub mod types;
pub use types::{Backend, Direction, Entity};
