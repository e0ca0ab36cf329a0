use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tob_config::TobConfig;
use tob_core::entities::ContentTree;
use tob_storage::assemble::assemble_content_tree;
use tob_storage::wire::{Mutation, WireEntity, decode_entities};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AssembleArgs;
use crate::output::output;

/// A line of the input: either a bare entity or an upsert as written by
/// `tob plan --output`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EntityLine {
    Mutation(Mutation),
    Entity(WireEntity),
}

impl EntityLine {
    fn into_entity(self) -> WireEntity {
        match self {
            Self::Mutation(Mutation::Upsert(entity)) | Self::Entity(entity) => entity,
        }
    }
}

/// Handle `tob assemble`.
pub fn handle(args: &AssembleArgs, config: &TobConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tree = read_tree(&args.input)?;
    output(&tree, flags.format, config.general.pretty)
}

/// Decode every entity in a JSON lines file and assemble the learning path.
pub fn read_tree(path: &Path) -> anyhow::Result<ContentTree> {
    let entities = serde_jsonlines::json_lines(path)
        .with_context(|| format!("failed to open {}", path.display()))?
        .map(|line: std::io::Result<EntityLine>| line.map(EntityLine::into_entity))
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("failed to read entities from {}", path.display()))?;
    tracing::debug!(count = entities.len(), path = %path.display(), "read entities");

    let records = decode_entities(&entities).context("failed to decode entities")?;
    assemble_content_tree(records).context("failed to assemble content tree")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tob_core::entities::{Group, Module, Node, Unit};
    use tob_core::enums::Sdk;

    use super::*;
    use crate::commands::plan::build_mutations;

    fn tree() -> ContentTree {
        ContentTree {
            sdk: Sdk::Java,
            modules: vec![Module {
                id: "intro".into(),
                title: "Introduction".into(),
                complexity: "BASIC".into(),
                nodes: vec![
                    Node::Unit(Unit {
                        id: "hello".into(),
                        title: "Hello".into(),
                        description: "First steps".into(),
                        hints: vec!["Run it".into()],
                        task_snippet_id: "TB_EXAMPLES_hello".into(),
                        solution_snippet_id: "TB_SOLUTIONS_hello".into(),
                    }),
                    Node::Group(Group {
                        title: "Basics".into(),
                        nodes: vec![Node::Unit(Unit {
                            id: "pipeline".into(),
                            title: "Pipeline".into(),
                            ..Unit::default()
                        })],
                    }),
                ],
            }],
        }
    }

    #[test]
    fn planned_mutation_file_assembles_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mutations.jsonl");
        let original = tree();
        let mutations = build_mutations(&original, &TobConfig::default()).unwrap();
        serde_jsonlines::write_json_lines(&path, &mutations).unwrap();

        assert_eq!(read_tree(&path).unwrap(), original);
    }

    #[test]
    fn bare_entity_lines_are_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entities.jsonl");
        let original = tree();
        let mutations = build_mutations(&original, &TobConfig::default()).unwrap();
        let entities: Vec<&WireEntity> = mutations.iter().rev().map(Mutation::entity).collect();
        serde_jsonlines::write_json_lines(&path, &entities).unwrap();

        assert_eq!(read_tree(&path).unwrap(), original);
    }

    #[test]
    fn dump_without_root_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.jsonl");
        let mutations = build_mutations(&tree(), &TobConfig::default()).unwrap();
        serde_jsonlines::write_json_lines(&path, &mutations[1..]).unwrap();

        let err = read_tree(&path).unwrap_err();
        assert!(format!("{err:#}").contains("assemble"));
    }

    #[test]
    fn malformed_line_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jsonl");
        std::fs::write(&path, "not json\n").unwrap();

        assert!(read_tree(&path).is_err());
    }
}
