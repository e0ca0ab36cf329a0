use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use tob_config::TobConfig;
use tob_core::entities::ContentTree;
use tob_core::enums::Sdk;
use tob_storage::plan::{into_mutations, plan_content_tree};
use tob_storage::wire::Mutation;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::PlanArgs;
use crate::output::{output, output_list};

#[derive(Debug, Serialize)]
struct PlanSummary {
    sdk: Sdk,
    modules: usize,
    units: usize,
    mutations: usize,
    output: PathBuf,
}

/// Handle `tob plan`.
pub fn handle(args: &PlanArgs, config: &TobConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tree = read_tree(&args.input, args.sdk.or(config.general.default_sdk))?;
    let mutations = build_mutations(&tree, config)?;

    let Some(path) = &args.output else {
        return output_list(&mutations, flags.format, config.general.pretty);
    };

    serde_jsonlines::write_json_lines(path, &mutations)
        .with_context(|| format!("failed to write mutations to {}", path.display()))?;
    tracing::info!(path = %path.display(), count = mutations.len(), "wrote mutations");

    let summary = PlanSummary {
        sdk: tree.sdk,
        modules: tree.modules.len(),
        units: tree.unit_count(),
        mutations: mutations.len(),
        output: path.clone(),
    };
    output(&summary, flags.format, config.general.pretty)
}

/// Read a content tree from a JSON file, storing it under `sdk` if given.
pub fn read_tree(path: &Path, sdk: Option<Sdk>) -> anyhow::Result<ContentTree> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut tree: ContentTree = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid content tree", path.display()))?;

    if let Some(sdk) = sdk {
        if sdk != tree.sdk {
            tracing::debug!(from = %tree.sdk, to = %sdk, "overriding content tree sdk");
        }
        tree.sdk = sdk;
    }
    Ok(tree)
}

/// Plan `tree` and encode it as upserts for the configured partition.
pub fn build_mutations(tree: &ContentTree, config: &TobConfig) -> anyhow::Result<Vec<Mutation>> {
    let plan = plan_content_tree(tree).context("failed to plan content tree")?;
    Ok(into_mutations(&plan, &bootstrap::partition(config)))
}
