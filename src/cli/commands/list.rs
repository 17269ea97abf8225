//! List command implementation.
//!
//! The `bspcheck list` command shows what a suite would check without
//! reading any of the files.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::output::Locale;
use crate::suite::{builtin_names, resolve_suite, Suite};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, args: ListArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    fn write_human(&self, suite: &Suite, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Suite: {} ({})", suite.name, suite.title)?;
        writeln!(out, "Built-in suites: {}", builtin_names().join(", "))?;
        writeln!(out)?;

        writeln!(out, "Files:")?;
        for target in &suite.targets {
            writeln!(out, "  {}  {}", target.path, target.description)?;
        }

        for group in &suite.groups {
            writeln!(out)?;
            writeln!(out, "{} ({}):", group.title, group.path)?;
            for rule in &group.rules {
                writeln!(out, "  /{}/i  {}", rule.pattern, rule.description)?;
            }
        }

        writeln!(out)?;
        writeln!(
            out,
            "{} categories, {} checks",
            suite.category_count(),
            suite.check_count()
        )?;
        Ok(())
    }
}

impl Command for ListCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let suite = resolve_suite(&self.project_root, self.args.suite.as_deref(), Locale::En)?;

        if self.args.json {
            serde_json::to_writer_pretty(&mut *out, &suite).map_err(anyhow::Error::from)?;
            writeln!(out)?;
        } else {
            self.write_human(&suite, out)?;
        }

        Ok(CommandResult::success())
    }
}
