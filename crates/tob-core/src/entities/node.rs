use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Group, Unit};
use crate::enums::NodeType;

/// One entry of a learning-path tree.
///
/// Serialized with an inline `"type"` tag, e.g.
/// `{"type": "unit", "id": "intro", "title": "Intro", ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Unit(Unit),
    Group(Group),
}

impl Node {
    #[must_use]
    pub const fn node_type(&self) -> NodeType {
        match self {
            Self::Unit(_) => NodeType::Unit,
            Self::Group(_) => NodeType::Group,
        }
    }

    /// Identifier used when the node is persisted: the unit id, or the
    /// group title.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Unit(unit) => &unit.id,
            Self::Group(group) => &group.title,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Unit(unit) => &unit.title,
            Self::Group(group) => &group.title,
        }
    }

    /// Number of units in this subtree.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        match self {
            Self::Unit(_) => 1,
            Self::Group(group) => group.nodes.iter().map(Self::unit_count).sum(),
        }
    }
}
