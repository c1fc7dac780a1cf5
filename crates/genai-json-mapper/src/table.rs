//! Mapping tables: one entity, one direction, an ordered list of rules.

use genai_json_path::{Path, Segment};

use crate::transformers::Transform;
use crate::types::{Direction, Entity};

/// Where a rule writes.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// The object this table is building.
    Own(Path),
    /// The object of the table that invoked this one.
    Parent(Path),
}

/// One step of a mapping table.
///
/// Every rule that reads does nothing when its source is absent or `null`.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Copy {
        from: Path,
        to: Target,
    },
    Transform {
        from: Path,
        to: Target,
        transform: Transform,
    },
    /// Convert the value with another entity's table in the same direction.
    Nested {
        from: Path,
        to: Target,
        entity: Entity,
    },
    /// [`Rule::Nested`] applied to each element of an array.
    NestedEach {
        from: Path,
        to: Target,
        entity: Entity,
    },
    /// Run another entity's table for its writes into this one; its own
    /// result is dropped.
    Flatten {
        from: Path,
        entity: Entity,
    },
    /// Place each element of an array at `each` inside a fresh object and
    /// write the resulting array.
    Wrap {
        from: Path,
        to: Target,
        each: Path,
    },
    /// Reject the conversion when the field is set.
    Unsupported {
        from: Path,
    },
    /// Relocate values inside the object built so far.
    Move {
        moves: Vec<(Path, Path)>,
    },
}

impl Rule {
    pub fn copy(from: &[&str], to: &[&str]) -> Self {
        Rule::Copy {
            from: Path::from_keys(from),
            to: Target::Own(Path::from_keys(to)),
        }
    }

    /// Copy several fields that keep their name.
    pub fn same(fields: &[&str]) -> Vec<Self> {
        fields.iter().map(|f| Rule::copy(&[*f], &[*f])).collect()
    }

    pub fn to_parent(from: &[&str], to: &[&str]) -> Self {
        Rule::Copy {
            from: Path::from_keys(from),
            to: Target::Parent(Path::from_keys(to)),
        }
    }

    /// Copy into `field` of every element of the parent's `array`.
    pub fn to_parent_elements(from: &[&str], array: &str, field: &str) -> Self {
        Rule::Copy {
            from: Path::from_keys(from),
            to: Target::Parent(Path::new(vec![
                Segment::key(array),
                Segment::Wildcard,
                Segment::key(field),
            ])),
        }
    }

    pub fn transform(from: &[&str], to: &[&str], transform: Transform) -> Self {
        Rule::Transform {
            from: Path::from_keys(from),
            to: Target::Own(Path::from_keys(to)),
            transform,
        }
    }

    pub fn nested(from: &[&str], to: &[&str], entity: Entity) -> Self {
        Rule::Nested {
            from: Path::from_keys(from),
            to: Target::Own(Path::from_keys(to)),
            entity,
        }
    }

    pub fn nested_to_parent(from: &[&str], to: &[&str], entity: Entity) -> Self {
        Rule::Nested {
            from: Path::from_keys(from),
            to: Target::Parent(Path::from_keys(to)),
            entity,
        }
    }

    pub fn nested_each(from: &[&str], to: &[&str], entity: Entity) -> Self {
        Rule::NestedEach {
            from: Path::from_keys(from),
            to: Target::Own(Path::from_keys(to)),
            entity,
        }
    }

    pub fn flatten(from: &[&str], entity: Entity) -> Self {
        Rule::Flatten {
            from: Path::from_keys(from),
            entity,
        }
    }

    pub fn wrap(from: &[&str], to: &[&str], each: &[&str]) -> Self {
        Rule::Wrap {
            from: Path::from_keys(from),
            to: Target::Own(Path::from_keys(to)),
            each: Path::from_keys(each),
        }
    }

    pub fn unsupported(from: &[&str]) -> Self {
        Rule::Unsupported {
            from: Path::from_keys(from),
        }
    }

    /// Relocate every key of each element of `array` under `under`, the
    /// `array[].*` -> `array[].under.*` move.
    pub fn nest_elements(array: &str, under: &str) -> Self {
        let prefix = [Segment::key(array), Segment::Wildcard];
        let source = Path::new([&prefix[..], &[Segment::Wildcard]].concat());
        let dest = Path::new([&prefix[..], &[Segment::key(under), Segment::Wildcard]].concat());
        Rule::Move {
            moves: vec![(source, dest)],
        }
    }

    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Rule::Copy { .. } => "copy",
            Rule::Transform { .. } => "transform",
            Rule::Nested { .. } => "nested",
            Rule::NestedEach { .. } => "nested_each",
            Rule::Flatten { .. } => "flatten",
            Rule::Wrap { .. } => "wrap",
            Rule::Unsupported { .. } => "unsupported",
            Rule::Move { .. } => "move",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MappingTable {
    pub entity: Entity,
    pub direction: Direction,
    pub rules: Vec<Rule>,
}

impl MappingTable {
    pub fn new(entity: Entity, direction: Direction, rules: Vec<Rule>) -> Self {
        Self {
            entity,
            direction,
            rules,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nest_elements_paths() {
        let Rule::Move { moves } = Rule::nest_elements("requests", "request") else {
            panic!("expected a move rule");
        };
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].0.to_string(), "requests[].*");
        assert_eq!(moves[0].1.to_string(), "requests[].request.*");
    }

    #[test]
    fn test_same_copies_in_place() {
        let rules = Rule::same(&["name", "done"]);
        assert_eq!(rules[1], Rule::copy(&["done"], &["done"]));
    }
}
