//! Shared fixtures for tob-storage unit tests.

use tob_core::entities::{ContentTree, Group, Module, Node, Unit};
use tob_core::enums::Sdk;

/// A fully populated unit whose fields are all derived from `id`.
pub fn sample_unit(id: &str) -> Unit {
    Unit {
        id: id.to_string(),
        title: format!("Title {id}"),
        description: format!("Description of {id}"),
        hints: vec![format!("Hint 1 for {id}"), format!("Hint 2 for {id}")],
        task_snippet_id: format!("task-{id}"),
        solution_snippet_id: format!("solution-{id}"),
    }
}

/// A group heading with no children.
pub fn sample_group(title: &str) -> Group {
    Group {
        title: title.to_string(),
        nodes: Vec::new(),
    }
}

/// Two Java modules; the first nests a group with two units.
pub fn sample_tree() -> ContentTree {
    ContentTree {
        sdk: Sdk::Java,
        modules: vec![
            Module {
                id: "module-intro".into(),
                title: "Introduction".into(),
                complexity: "BASIC".into(),
                nodes: vec![
                    Node::Unit(sample_unit("intro")),
                    Node::Group(Group {
                        title: "Basics".into(),
                        nodes: vec![
                            Node::Unit(sample_unit("pcollection")),
                            Node::Unit(sample_unit("ptransform")),
                        ],
                    }),
                ],
            },
            Module {
                id: "module-windowing".into(),
                title: "Windowing".into(),
                complexity: "ADVANCED".into(),
                nodes: vec![Node::Unit(sample_unit("windowing"))],
            },
        ],
    }
}
