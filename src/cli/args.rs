//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// bspcheck - Validate BSP driver integrations against expected files and patterns.
#[derive(Debug, Parser)]
#[command(name = "bspcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a check suite (default if no command specified)
    Check(CheckArgs),

    /// Show the checks of a suite without running them
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Built-in suite name or path to a suite file
    #[arg(short, long, env = "BSPCHECK_SUITE")]
    pub suite: Option<String>,

    /// Output format: human, plain, json
    #[arg(short, long, default_value = "human")]
    pub format: String,

    /// Report language for human output: en, zh-CN
    #[arg(long, default_value = "en", env = "BSPCHECK_LOCALE")]
    pub locale: String,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            suite: None,
            format: "human".to_string(),
            locale: "en".to_string(),
        }
    }
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Built-in suite name or path to a suite file
    #[arg(short, long)]
    pub suite: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_args_has_no_command() {
        let cli = Cli::parse_from(["bspcheck"]);
        assert!(cli.command.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn check_accepts_suite_and_format() {
        let cli = Cli::parse_from([
            "bspcheck",
            "check",
            "--suite",
            "rtc-quick",
            "--format",
            "plain",
        ]);
        match cli.command {
            Some(Commands::Check(args)) => {
                assert_eq!(args.suite.as_deref(), Some("rtc-quick"));
                assert_eq!(args.format, "plain");
            }
            other => panic!("expected check, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["bspcheck", "list", "--project", "/bsp", "--no-color"]);
        assert_eq!(cli.project, Some(PathBuf::from("/bsp")));
        assert!(cli.no_color);
    }

    #[test]
    fn check_args_default_matches_clap_defaults() {
        let defaults = CheckArgs::default();
        assert_eq!(defaults.format, "human");
        assert_eq!(defaults.locale, "en");
        assert!(defaults.suite.is_none());
    }
}
