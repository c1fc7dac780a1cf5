use crate::table::{MappingTable, Rule};
use crate::transformers::Transform;
use crate::types::{Direction, Entity};

pub(super) fn tables() -> Vec<MappingTable> {
    use Direction::*;
    use Entity::*;

    vec![
        // create
        MappingTable::new(
            CreateBatchJobParameters,
            ToMldev,
            vec![
                Rule::transform(&["model"], &["_url", "model"], Transform::Model),
                Rule::nested(&["src"], &["batch", "inputConfig"], BatchJobSource),
                Rule::flatten(&["config"], CreateBatchJobConfig),
            ],
        ),
        MappingTable::new(
            CreateBatchJobParameters,
            ToVertex,
            vec![
                Rule::transform(&["model"], &["model"], Transform::Model),
                Rule::nested(&["src"], &["inputConfig"], BatchJobSource),
                Rule::flatten(&["config"], CreateBatchJobConfig),
            ],
        ),
        MappingTable::new(
            CreateBatchJobConfig,
            ToMldev,
            vec![
                Rule::to_parent(&["displayName"], &["batch", "displayName"]),
                Rule::unsupported(&["dest"]),
            ],
        ),
        MappingTable::new(
            CreateBatchJobConfig,
            ToVertex,
            vec![
                Rule::to_parent(&["displayName"], &["displayName"]),
                Rule::nested_to_parent(&["dest"], &["outputConfig"], BatchJobDestination),
            ],
        ),
        // sources
        MappingTable::new(
            BatchJobSource,
            ToMldev,
            vec![
                Rule::unsupported(&["format"]),
                Rule::unsupported(&["gcsUri"]),
                Rule::unsupported(&["bigqueryUri"]),
                Rule::copy(&["fileName"], &["fileName"]),
                Rule::copy(&["inlinedRequests"], &["requests", "requests"]),
            ],
        ),
        MappingTable::new(
            BatchJobSource,
            ToVertex,
            vec![
                Rule::copy(&["format"], &["instancesFormat"]),
                Rule::copy(&["gcsUri"], &["gcsSource", "uris"]),
                Rule::copy(&["bigqueryUri"], &["bigquerySource", "inputUri"]),
                Rule::unsupported(&["fileName"]),
                Rule::unsupported(&["inlinedRequests"]),
            ],
        ),
        MappingTable::new(
            BatchJobSource,
            FromVertex,
            vec![
                Rule::copy(&["instancesFormat"], &["format"]),
                Rule::copy(&["gcsSource", "uris"], &["gcsUri"]),
                Rule::copy(&["bigquerySource", "inputUri"], &["bigqueryUri"]),
            ],
        ),
        // destinations
        MappingTable::new(
            BatchJobDestination,
            ToVertex,
            vec![
                Rule::copy(&["format"], &["predictionsFormat"]),
                Rule::copy(&["gcsUri"], &["gcsDestination", "outputUriPrefix"]),
                Rule::copy(&["bigqueryUri"], &["bigqueryDestination", "outputUri"]),
                Rule::unsupported(&["fileName"]),
                Rule::unsupported(&["inlinedResponses"]),
            ],
        ),
        MappingTable::new(
            BatchJobDestination,
            FromMldev,
            vec![
                Rule::copy(&["responsesFile"], &["fileName"]),
                Rule::nested_each(
                    &["inlinedResponses", "inlinedResponses"],
                    &["inlinedResponses"],
                    InlinedResponse,
                ),
                Rule::copy(
                    &["inlinedEmbedContentResponses", "inlinedResponses"],
                    &["inlinedEmbedContentResponses"],
                ),
            ],
        ),
        MappingTable::new(
            BatchJobDestination,
            FromVertex,
            vec![
                Rule::copy(&["predictionsFormat"], &["format"]),
                Rule::copy(&["gcsDestination", "outputUriPrefix"], &["gcsUri"]),
                Rule::copy(&["bigqueryDestination", "outputUri"], &["bigqueryUri"]),
            ],
        ),
        MappingTable::new(
            InlinedResponse,
            FromMldev,
            Rule::same(&["response", "error"]),
        ),
        // jobs
        MappingTable::new(
            BatchJob,
            FromMldev,
            vec![
                Rule::copy(&["name"], &["name"]),
                Rule::copy(&["metadata", "displayName"], &["displayName"]),
                Rule::transform(&["metadata", "state"], &["state"], Transform::JobState),
                Rule::copy(&["metadata", "createTime"], &["createTime"]),
                Rule::copy(&["metadata", "endTime"], &["endTime"]),
                Rule::copy(&["metadata", "updateTime"], &["updateTime"]),
                Rule::copy(&["metadata", "model"], &["model"]),
                Rule::nested(&["metadata", "output"], &["dest"], BatchJobDestination),
            ],
        ),
        MappingTable::new(
            BatchJob,
            FromVertex,
            [
                Rule::same(&[
                    "name",
                    "displayName",
                    "state",
                    "error",
                    "createTime",
                    "startTime",
                    "endTime",
                    "updateTime",
                    "model",
                    "completionStats",
                ]),
                vec![
                    Rule::nested(&["inputConfig"], &["src"], BatchJobSource),
                    Rule::nested(&["outputConfig"], &["dest"], BatchJobDestination),
                ],
            ]
            .concat(),
        ),
        // embeddings
        MappingTable::new(
            CreateEmbeddingsBatchJobParameters,
            ToMldev,
            vec![
                Rule::transform(&["model"], &["_url", "model"], Transform::Model),
                Rule::nested(&["src"], &["batch", "inputConfig"], EmbeddingsBatchJobSource),
                Rule::flatten(&["config"], CreateEmbeddingsBatchJobConfig),
            ],
        ),
        MappingTable::new(
            CreateEmbeddingsBatchJobConfig,
            ToMldev,
            vec![Rule::to_parent(&["displayName"], &["batch", "displayName"])],
        ),
        MappingTable::new(
            EmbeddingsBatchJobSource,
            ToMldev,
            vec![
                Rule::copy(&["fileName"], &["fileName"]),
                Rule::nested(&["inlinedRequests"], &["requests"], EmbedContentBatch),
            ],
        ),
        // Each content becomes `{"request": {"content": ..}}`; config fields
        // land beside `request` and the final move folds them into it.
        MappingTable::new(
            EmbedContentBatch,
            ToMldev,
            vec![
                Rule::wrap(&["contents"], &["requests"], &["request", "content"]),
                Rule::flatten(&["config"], EmbedContentConfig),
                Rule::nest_elements("requests", "request"),
            ],
        ),
        MappingTable::new(
            EmbedContentConfig,
            ToMldev,
            vec![
                Rule::to_parent_elements(&["taskType"], "requests", "taskType"),
                Rule::to_parent_elements(&["title"], "requests", "title"),
                Rule::to_parent_elements(
                    &["outputDimensionality"],
                    "requests",
                    "outputDimensionality",
                ),
                Rule::unsupported(&["mimeType"]),
                Rule::unsupported(&["autoTruncate"]),
            ],
        ),
    ]
}
