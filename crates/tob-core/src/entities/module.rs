use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Node;

/// A top-level chapter of a learning path.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: String,
    pub title: String,
    /// Free-form difficulty label (e.g. `BASIC`, `MEDIUM`, `ADVANCED`).
    #[serde(default)]
    pub complexity: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
}
