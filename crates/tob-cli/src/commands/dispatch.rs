use tob_config::TobConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, config: &TobConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Key(args) => commands::key::handle(&args, config, flags),
        Commands::Plan(args) => commands::plan::handle(&args, config, flags),
        Commands::Assemble(args) => commands::assemble::handle(&args, config, flags),
    }
}
