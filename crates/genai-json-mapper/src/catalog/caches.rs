use crate::table::{MappingTable, Rule};
use crate::transformers::Transform;
use crate::types::{Direction, Entity};

const CACHED_CONTENT_FIELDS: &[&str] = &[
    "name",
    "displayName",
    "model",
    "createTime",
    "updateTime",
    "expireTime",
    "usageMetadata",
];

const CONFIG_FIELDS: &[&str] = &[
    "ttl",
    "expireTime",
    "displayName",
    "contents",
    "systemInstruction",
    "tools",
    "toolConfig",
];

fn config_to_parent() -> Vec<Rule> {
    CONFIG_FIELDS
        .iter()
        .map(|f| Rule::to_parent(&[*f], &[*f]))
        .collect()
}

pub(super) fn tables() -> Vec<MappingTable> {
    use Direction::*;
    use Entity::*;

    let mut tables = Vec::new();
    for direction in [FromMldev, FromVertex] {
        tables.push(MappingTable::new(
            CachedContent,
            direction,
            Rule::same(CACHED_CONTENT_FIELDS),
        ));
    }
    for direction in [ToMldev, ToVertex] {
        tables.push(MappingTable::new(
            CreateCachedContentParameters,
            direction,
            vec![
                Rule::transform(&["model"], &["model"], Transform::CachesModel),
                Rule::flatten(&["config"], CreateCachedContentConfig),
            ],
        ));
        tables.push(MappingTable::new(
            GetCachedContentParameters,
            direction,
            vec![Rule::transform(
                &["name"],
                &["_url", "name"],
                Transform::CachedContentName,
            )],
        ));
    }

    let mut mldev = config_to_parent();
    mldev.push(Rule::unsupported(&["kmsKeyName"]));
    tables.push(MappingTable::new(CreateCachedContentConfig, ToMldev, mldev));

    let mut vertex = config_to_parent();
    vertex.push(Rule::to_parent(
        &["kmsKeyName"],
        &["encryption_spec", "kmsKeyName"],
    ));
    tables.push(MappingTable::new(CreateCachedContentConfig, ToVertex, vertex));

    tables
}
