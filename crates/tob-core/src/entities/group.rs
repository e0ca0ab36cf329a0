use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Node;

/// A non-leaf heading in a module's tree.
///
/// Groups have no identifier of their own; the title doubles as one when a
/// group is persisted as a node.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub title: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
}
