use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A leaf exercise: description, hints, and references to the task and
/// solution snippets in the playground.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default)]
    pub task_snippet_id: String,
    #[serde(default)]
    pub solution_snippet_id: String,
}
