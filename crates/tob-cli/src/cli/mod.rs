use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `tob` binary.
#[derive(Debug, Parser)]
#[command(
    name = "tob",
    version,
    about = "Tour of Beam - learning content Datastore mapping"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;
    use tob_core::enums::Sdk;

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["tob", "--format", "raw", "--verbose", "key", "--sdk", "go"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Key(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["tob", "assemble", "dump.jsonl", "--quiet"])
            .expect("cli should parse");

        assert!(cli.quiet);
        assert_eq!(cli.format, OutputFormat::Json);
        let Commands::Assemble(args) = cli.command else {
            panic!("expected assemble");
        };
        assert_eq!(args.input, PathBuf::from("dump.jsonl"));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["tob", "--quiet", "--format", "raw", "key"])
            .expect("cli should parse");
        let flags = cli.global_flags();

        assert!(flags.quiet);
        assert!(!flags.verbose);
        assert_eq!(flags.format, OutputFormat::Raw);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["tob", "--format", "table", "key"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn sdk_parses_case_insensitively() {
        let cli = Cli::try_parse_from(["tob", "plan", "tree.json", "--sdk", "SCIO"])
            .expect("cli should parse");
        let Commands::Plan(args) = cli.command else {
            panic!("expected plan");
        };
        assert_eq!(args.sdk, Some(Sdk::Scio));
        assert!(args.output.is_none());
    }

    #[test]
    fn unknown_sdk_is_rejected() {
        let parsed = Cli::try_parse_from(["tob", "key", "--sdk", "rust"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn key_nodes_repeat_in_order() {
        let cli = Cli::try_parse_from([
            "tob", "key", "--sdk", "java", "--module", "intro", "--node", "basics", "--node",
            "pcollection",
        ])
        .expect("cli should parse");
        let Commands::Key(args) = cli.command else {
            panic!("expected key");
        };
        assert_eq!(args.module.as_deref(), Some("intro"));
        assert_eq!(args.nodes, vec!["basics", "pcollection"]);
    }

    #[test]
    fn key_node_requires_module() {
        let parsed = Cli::try_parse_from(["tob", "key", "--sdk", "go", "--node", "n"]);
        assert!(parsed.is_err());
    }
}
