use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Module;
use crate::enums::Sdk;

/// The complete learning path of one SDK, modules in display order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentTree {
    pub sdk: Sdk,
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl ContentTree {
    /// Count every unit in the tree, at any depth.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.modules
            .iter()
            .flat_map(|module| &module.nodes)
            .map(super::Node::unit_count)
            .sum()
    }
}
