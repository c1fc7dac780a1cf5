//! Backends, directions and the entities the catalog knows how to map.

use std::fmt;

use serde::Deserialize;

/// The two wire shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Gemini Developer API.
    #[default]
    #[serde(alias = "gemini")]
    Mldev,
    /// Vertex AI.
    Vertex,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Mldev => f.write_str("Gemini API"),
            Backend::Vertex => f.write_str("Vertex AI"),
        }
    }
}

/// Which way a conversion goes. `To*` builds a request for that backend,
/// `From*` reads one of its responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Direction {
    ToMldev,
    FromMldev,
    ToVertex,
    FromVertex,
}

impl Direction {
    pub fn to_backend(backend: Backend) -> Self {
        match backend {
            Backend::Mldev => Direction::ToMldev,
            Backend::Vertex => Direction::ToVertex,
        }
    }

    pub fn from_backend(backend: Backend) -> Self {
        match backend {
            Backend::Mldev => Direction::FromMldev,
            Backend::Vertex => Direction::FromVertex,
        }
    }

    pub fn backend(self) -> Backend {
        match self {
            Direction::ToMldev | Direction::FromMldev => Backend::Mldev,
            Direction::ToVertex | Direction::FromVertex => Backend::Vertex,
        }
    }

    pub fn is_request(self) -> bool {
        matches!(self, Direction::ToMldev | Direction::ToVertex)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Logical entities with mapping tables in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Entity {
    // operations
    GetOperationParameters,
    FetchPredictOperationParameters,
    GenerateVideosOperation,
    GenerateVideosResponse,
    GeneratedVideo,
    Video,
    ImportFileOperation,
    ImportFileResponse,
    UploadToFileSearchStoreOperation,
    UploadToFileSearchStoreResponse,
    // batches
    CreateBatchJobParameters,
    CreateBatchJobConfig,
    BatchJob,
    BatchJobSource,
    BatchJobDestination,
    InlinedResponse,
    CreateEmbeddingsBatchJobParameters,
    CreateEmbeddingsBatchJobConfig,
    EmbeddingsBatchJobSource,
    EmbedContentBatch,
    EmbedContentConfig,
    // caches
    CachedContent,
    CreateCachedContentParameters,
    CreateCachedContentConfig,
    GetCachedContentParameters,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_backend() {
        for backend in [Backend::Mldev, Backend::Vertex] {
            assert_eq!(Direction::to_backend(backend).backend(), backend);
            assert_eq!(Direction::from_backend(backend).backend(), backend);
            assert!(Direction::to_backend(backend).is_request());
            assert!(!Direction::from_backend(backend).is_request());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Backend::Mldev.to_string(), "Gemini API");
        assert_eq!(Backend::Vertex.to_string(), "Vertex AI");
        assert_eq!(Direction::FromVertex.to_string(), "FromVertex");
        assert_eq!(Entity::BatchJob.to_string(), "BatchJob");
    }
}
