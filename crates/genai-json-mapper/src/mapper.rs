//! The generic interpreter that runs mapping tables.

use std::sync::Arc;

use genai_json_path::{get_value_by_path, is_zero, move_value_by_path, set_value_by_path, Path};
use serde_json::{Map, Value};

use crate::catalog::Catalog;
use crate::config::BackendConfig;
use crate::error::MapError;
use crate::table::{Rule, Target};
use crate::types::{Backend, Direction, Entity};

/// Converts JSON trees between the SDK shape and a backend's wire shape.
///
/// The mapper holds no per-call state; one instance can serve any number of
/// conversions, from any number of threads.
#[derive(Debug, Clone)]
pub struct SchemaMapper {
    config: BackendConfig,
    catalog: Arc<Catalog>,
}

impl SchemaMapper {
    /// A mapper over the built-in catalog.
    pub fn new(config: BackendConfig) -> Self {
        Self::with_catalog(config, Catalog::builtin())
    }

    pub fn with_catalog(config: BackendConfig, catalog: Arc<Catalog>) -> Self {
        Self { config, catalog }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    pub fn backend(&self) -> Backend {
        self.config.backend
    }

    /// Build a request body for the configured backend.
    ///
    /// Config entities such as [`Entity::CreateBatchJobConfig`] only write
    /// into the request that embeds them; converted on their own they
    /// yield `{}`. Convert the enclosing parameters entity instead.
    pub fn to_backend(&self, entity: Entity, source: &Value) -> Result<Value, MapError> {
        self.convert(entity, Direction::to_backend(self.backend()), source)
    }

    /// Read a response of the configured backend.
    pub fn from_backend(&self, entity: Entity, source: &Value) -> Result<Value, MapError> {
        self.convert(entity, Direction::from_backend(self.backend()), source)
    }

    /// Run the table for `entity` in `direction` over `source`.
    ///
    /// Writes a top-level table addresses to its parent are dropped.
    ///
    /// # Errors
    ///
    /// `Config` when `direction` belongs to a backend other than the
    /// configured one, since transformers read the configured backend.
    pub fn convert(
        &self,
        entity: Entity,
        direction: Direction,
        source: &Value,
    ) -> Result<Value, MapError> {
        if direction.backend() != self.backend() {
            return Err(MapError::Config(format!(
                "direction {direction} targets {}, mapper is configured for {}",
                direction.backend(),
                self.backend()
            )));
        }
        let mut parent = Value::Object(Map::new());
        self.convert_with_parent(entity, direction, source, &mut parent)
    }

    fn convert_with_parent(
        &self,
        entity: Entity,
        direction: Direction,
        source: &Value,
        parent: &mut Value,
    ) -> Result<Value, MapError> {
        let table = self
            .catalog
            .get(entity, direction)
            .ok_or(MapError::NoMapping { entity, direction })?;
        tracing::debug!(%entity, %direction, rules = table.rules.len(), "converting");

        let mut own = Value::Object(Map::new());
        for rule in &table.rules {
            tracing::trace!(%entity, kind = rule.kind(), "applying rule");
            match rule {
                Rule::Copy { from, to } => {
                    if let Some(value) = read(source, from)? {
                        write(to, &mut own, parent, value)?;
                    }
                }
                Rule::Transform {
                    from,
                    to,
                    transform,
                } => {
                    if let Some(value) = read(source, from)? {
                        let value = transform.apply(&value, &self.config)?;
                        write(to, &mut own, parent, value)?;
                    }
                }
                Rule::Nested { from, to, entity } => {
                    if let Some(value) = read(source, from)? {
                        let value = self.convert_with_parent(*entity, direction, &value, &mut own)?;
                        write(to, &mut own, parent, value)?;
                    }
                }
                Rule::NestedEach { from, to, entity } => {
                    if let Some(value) = read(source, from)? {
                        let Value::Array(items) = value else {
                            return Err(MapError::invalid(
                                from.to_string(),
                                format!("expected an array, got {value}"),
                            ));
                        };
                        let mut converted = Vec::with_capacity(items.len());
                        for item in &items {
                            converted.push(self.convert_with_parent(
                                *entity, direction, item, &mut own,
                            )?);
                        }
                        write(to, &mut own, parent, Value::Array(converted))?;
                    }
                }
                Rule::Flatten { from, entity } => {
                    if let Some(value) = read(source, from)? {
                        self.convert_with_parent(*entity, direction, &value, &mut own)?;
                    }
                }
                Rule::Wrap { from, to, each } => {
                    if let Some(value) = read(source, from)? {
                        let Value::Array(items) = value else {
                            return Err(MapError::invalid(
                                from.to_string(),
                                format!("expected an array, got {value}"),
                            ));
                        };
                        let mut wrapped = Vec::with_capacity(items.len());
                        for item in items {
                            let mut element = Value::Object(Map::new());
                            set_value_by_path(&mut element, each, item)?;
                            wrapped.push(element);
                        }
                        write(to, &mut own, parent, Value::Array(wrapped))?;
                    }
                }
                Rule::Unsupported { from } => {
                    let value = read(source, from)?;
                    if !is_zero(value.as_ref()) {
                        let backend = direction.backend();
                        tracing::debug!(%entity, field = %from, %backend, "rejecting unsupported field");
                        return Err(MapError::Unsupported {
                            field: from.to_string(),
                            backend,
                        });
                    }
                }
                Rule::Move { moves } => {
                    move_value_by_path(&mut own, moves)?;
                }
            }
        }
        Ok(own)
    }
}

/// A present `null` reads as absent.
fn read(source: &Value, from: &Path) -> Result<Option<Value>, MapError> {
    if source.is_null() {
        return Ok(None);
    }
    Ok(get_value_by_path(source, from)?.filter(|v| !v.is_null()))
}

fn write(target: &Target, own: &mut Value, parent: &mut Value, value: Value) -> Result<(), MapError> {
    match target {
        Target::Own(path) => set_value_by_path(own, path, value)?,
        Target::Parent(path) => set_value_by_path(parent, path, value)?,
    }
    Ok(())
}
