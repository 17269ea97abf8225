//! Check command implementation.
//!
//! The `bspcheck check` command runs a suite against the project root and
//! prints the report in the selected format.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::error::{CheckError, Result};
use crate::output::{
    HumanFormatter, JsonFormatter, Locale, OutputFormat, PlainFormatter, ReportFormatter,
};
use crate::suite::resolve_suite;
use crate::validator::{run_suite, Summary};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    args: CheckArgs,
    use_color: bool,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs, use_color: bool) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            use_color,
        }
    }

    fn output_format(&self) -> Result<OutputFormat> {
        self.args
            .format
            .parse()
            .map_err(|message| CheckError::InvalidArgument { message })
    }

    fn locale(&self) -> Result<Locale> {
        self.args
            .locale
            .parse()
            .map_err(|message| CheckError::InvalidArgument { message })
    }

    fn write_report(
        &self,
        format: OutputFormat,
        locale: Locale,
        summary: &Summary,
        mut out: &mut dyn Write,
    ) -> Result<()> {
        match format {
            OutputFormat::Human => {
                HumanFormatter::new(locale, self.use_color).format(summary, &mut out)?
            }
            OutputFormat::Plain => PlainFormatter::new().format(summary, &mut out)?,
            OutputFormat::Json => JsonFormatter::new().format(summary, &mut out)?,
        }
        out.flush()?;
        Ok(())
    }
}

impl Command for CheckCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        // Validate arguments before touching the filesystem
        let format = self.output_format()?;
        let locale = self.locale()?;
        let suite = resolve_suite(&self.project_root, self.args.suite.as_deref(), locale)?;

        let summary = run_suite(&self.project_root, &suite);
        self.write_report(format, locale, &summary, out)?;

        if summary.is_success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(summary.exit_code()))
        }
    }
}
