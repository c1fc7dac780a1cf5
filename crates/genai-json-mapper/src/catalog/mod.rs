//! Built-in mapping tables.

mod batches;
mod caches;
mod operations;

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::table::MappingTable;
use crate::types::{Direction, Entity};

static BUILTIN: Lazy<Arc<Catalog>> = Lazy::new(|| {
    let mut catalog = Catalog::new();
    catalog.extend(operations::tables());
    catalog.extend(batches::tables());
    catalog.extend(caches::tables());
    tracing::debug!(tables = catalog.len(), "built mapping catalog");
    Arc::new(catalog)
});

/// Mapping tables keyed by entity and direction.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: HashMap<(Entity, Direction), MappingTable>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The tables shipped with this crate.
    pub fn builtin() -> Arc<Catalog> {
        Arc::clone(&BUILTIN)
    }

    /// Add a table, replacing any previous one for the same key.
    pub fn insert(&mut self, table: MappingTable) {
        self.tables.insert((table.entity, table.direction), table);
    }

    pub fn get(&self, entity: Entity, direction: Direction) -> Option<&MappingTable> {
        self.tables.get(&(entity, direction))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Extend<MappingTable> for Catalog {
    fn extend<I: IntoIterator<Item = MappingTable>>(&mut self, iter: I) {
        for table in iter {
            self.insert(table);
        }
    }
}

impl FromIterator<MappingTable> for Catalog {
    fn from_iter<I: IntoIterator<Item = MappingTable>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        catalog.extend(iter);
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Rule, Target};

    /// Every entity a builtin table points at must itself have a table in
    /// the same direction.
    #[test]
    fn test_builtin_references_resolve() {
        let catalog = Catalog::builtin();
        for table in catalog.tables.values() {
            for rule in &table.rules {
                let nested = match rule {
                    Rule::Nested { entity, .. }
                    | Rule::NestedEach { entity, .. }
                    | Rule::Flatten { entity, .. } => *entity,
                    _ => continue,
                };
                assert!(
                    catalog.get(nested, table.direction).is_some(),
                    "{} {} refers to missing {nested}",
                    table.entity,
                    table.direction
                );
            }
        }
    }

    #[test]
    fn test_builtin_directions_are_consistent() {
        let catalog = Catalog::builtin();
        for table in catalog.tables.values() {
            for rule in &table.rules {
                if let Rule::Unsupported { .. } = rule {
                    assert!(
                        table.direction.is_request(),
                        "{} {} rejects fields on a response",
                        table.entity,
                        table.direction
                    );
                }
                if let Rule::Copy { to: Target::Parent(_), .. } = rule {
                    assert!(table.direction.is_request());
                }
            }
        }
    }

    #[test]
    fn test_insert_replaces() {
        let mut catalog = Catalog::new();
        catalog.insert(MappingTable::new(Entity::Video, Direction::FromMldev, vec![]));
        catalog.insert(MappingTable::new(
            Entity::Video,
            Direction::FromMldev,
            Rule::same(&["uri"]),
        ));
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.get(Entity::Video, Direction::FromMldev).map(|t| t.rules.len()),
            Some(1)
        );
    }
}
