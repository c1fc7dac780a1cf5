use crate::table::{MappingTable, Rule};
use crate::transformers::Transform;
use crate::types::{Direction, Entity};

pub(super) fn tables() -> Vec<MappingTable> {
    use Direction::*;
    use Entity::*;

    let operation_fields = || Rule::same(&["name", "metadata", "done", "error"]);

    vec![
        MappingTable::new(
            GetOperationParameters,
            ToMldev,
            vec![Rule::copy(&["operationName"], &["_url", "operationName"])],
        ),
        MappingTable::new(
            GetOperationParameters,
            ToVertex,
            vec![Rule::copy(&["operationName"], &["_url", "operationName"])],
        ),
        MappingTable::new(
            FetchPredictOperationParameters,
            ToMldev,
            vec![
                Rule::unsupported(&["operationName"]),
                Rule::unsupported(&["resourceName"]),
                Rule::unsupported(&["config"]),
            ],
        ),
        MappingTable::new(
            FetchPredictOperationParameters,
            ToVertex,
            vec![
                Rule::copy(&["operationName"], &["operationName"]),
                Rule::copy(&["resourceName"], &["_url", "resourceName"]),
            ],
        ),
        MappingTable::new(
            GenerateVideosOperation,
            FromMldev,
            [
                operation_fields(),
                vec![Rule::nested(
                    &["response", "generateVideoResponse"],
                    &["response"],
                    GenerateVideosResponse,
                )],
            ]
            .concat(),
        ),
        MappingTable::new(
            GenerateVideosOperation,
            FromVertex,
            [
                operation_fields(),
                vec![Rule::nested(&["response"], &["response"], GenerateVideosResponse)],
            ]
            .concat(),
        ),
        MappingTable::new(
            GenerateVideosResponse,
            FromMldev,
            vec![
                Rule::nested_each(&["generatedSamples"], &["generatedVideos"], GeneratedVideo),
                Rule::copy(&["raiMediaFilteredCount"], &["raiMediaFilteredCount"]),
                Rule::copy(&["raiMediaFilteredReasons"], &["raiMediaFilteredReasons"]),
            ],
        ),
        MappingTable::new(
            GenerateVideosResponse,
            FromVertex,
            vec![
                Rule::nested_each(&["videos"], &["generatedVideos"], GeneratedVideo),
                Rule::copy(&["raiMediaFilteredCount"], &["raiMediaFilteredCount"]),
                Rule::copy(&["raiMediaFilteredReasons"], &["raiMediaFilteredReasons"]),
            ],
        ),
        MappingTable::new(
            GeneratedVideo,
            FromMldev,
            vec![Rule::nested(&["video"], &["video"], Video)],
        ),
        // Vertex returns the video fields inline.
        MappingTable::new(
            GeneratedVideo,
            FromVertex,
            vec![Rule::nested(&["_self"], &["video"], Video)],
        ),
        MappingTable::new(
            Video,
            FromMldev,
            vec![
                Rule::copy(&["uri"], &["uri"]),
                Rule::transform(&["encodedVideo"], &["videoBytes"], Transform::Bytes),
                Rule::copy(&["encoding"], &["mimeType"]),
            ],
        ),
        MappingTable::new(
            Video,
            FromVertex,
            vec![
                Rule::copy(&["gcsUri"], &["uri"]),
                Rule::transform(&["bytesBase64Encoded"], &["videoBytes"], Transform::Bytes),
                Rule::copy(&["mimeType"], &["mimeType"]),
            ],
        ),
        MappingTable::new(
            ImportFileOperation,
            FromMldev,
            [
                operation_fields(),
                vec![Rule::nested(&["response"], &["response"], ImportFileResponse)],
            ]
            .concat(),
        ),
        MappingTable::new(
            ImportFileResponse,
            FromMldev,
            Rule::same(&["sdkHttpResponse", "parent", "documentName"]),
        ),
        MappingTable::new(
            UploadToFileSearchStoreOperation,
            FromMldev,
            [
                operation_fields(),
                vec![Rule::nested(
                    &["response"],
                    &["response"],
                    UploadToFileSearchStoreResponse,
                )],
            ]
            .concat(),
        ),
        MappingTable::new(
            UploadToFileSearchStoreResponse,
            FromMldev,
            Rule::same(&["sdkHttpResponse", "parent", "documentName"]),
        ),
    ]
}
