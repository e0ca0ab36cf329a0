use std::path::PathBuf;

use clap::{Args, Subcommand};
use tob_core::enums::Sdk;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Print the Datastore key of a learning path, module or node.
    Key(KeyArgs),
    /// Flatten a content tree into upsert mutations.
    Plan(PlanArgs),
    /// Rebuild a content tree from stored entities.
    Assemble(AssembleArgs),
}

/// Arguments for `tob key`.
#[derive(Clone, Debug, Args)]
pub struct KeyArgs {
    /// SDK of the learning path (defaults to `general.default_sdk`).
    #[arg(long)]
    pub sdk: Option<Sdk>,
    /// Module id under the learning path root.
    #[arg(long)]
    pub module: Option<String>,
    /// Node ids from the module downwards; repeat for nested groups.
    #[arg(long = "node", requires = "module")]
    pub nodes: Vec<String>,
}

/// Arguments for `tob plan`.
#[derive(Clone, Debug, Args)]
pub struct PlanArgs {
    /// JSON file holding a content tree.
    pub input: PathBuf,
    /// Store the tree under this SDK instead of the one in the file.
    #[arg(long)]
    pub sdk: Option<Sdk>,
    /// Write mutations to this file as JSON lines instead of printing them.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `tob assemble`.
#[derive(Clone, Debug, Args)]
pub struct AssembleArgs {
    /// JSON lines file of entities or upsert mutations.
    pub input: PathBuf,
}
