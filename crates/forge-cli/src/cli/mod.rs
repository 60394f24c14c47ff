use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `thf` binary.
#[derive(Debug, Parser)]
#[command(name = "thf", version, about = "Thesis Forge - thesis proposal client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};
    use crate::cli::subcommands::ThesisCommands;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["thf", "--format", "json", "--limit", "10", "thesis", "list"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.limit, Some(10));
        assert!(matches!(
            cli.command,
            Commands::Thesis {
                action: ThesisCommands::List { .. }
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["thf", "thesis", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["thf", "--format", "xml", "thesis", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn thesis_new_accepts_all_field_flags() {
        let cli = Cli::try_parse_from([
            "thf",
            "thesis",
            "new",
            "--topic",
            "Adaptive batch sizing",
            "--main-area",
            "Distributed Systems",
            "--description",
            "A description that is long enough to pass.",
            "--interest",
            "4",
            "--link",
            "https://example.com",
        ])
        .expect("cli should parse");

        let Commands::Thesis {
            action: ThesisCommands::New(args),
        } = cli.command
        else {
            panic!("expected thesis new");
        };
        assert_eq!(args.topic.as_deref(), Some("Adaptive batch sizing"));
        assert_eq!(args.interest, Some(4));
        assert_eq!(args.link.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn auth_login_parses() {
        let cli = Cli::try_parse_from(["thf", "auth", "login"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Auth { .. }));
    }
}
