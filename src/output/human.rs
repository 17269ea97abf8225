//! Human-readable output formatter.
//!
//! Formats a run for terminal display with optional color support and
//! localized framing text.

use std::io::Write;

use super::locale::Locale;
use super::theme::ReportTheme;
use super::ReportFormatter;
use crate::validator::{CategoryKind, CategoryReport, CheckResult, ReadFailure, Summary};

/// Detail value the validator uses for an unmatched pattern.
const NOT_FOUND: &str = "not found";

/// Formats run output for human consumption.
pub struct HumanFormatter {
    pub locale: Locale,
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(locale: Locale, use_color: bool) -> Self {
        Self { locale, use_color }
    }

    fn theme(&self) -> ReportTheme {
        if self.use_color {
            ReportTheme::new()
        } else {
            ReportTheme::plain()
        }
    }

    fn write_existence<W: Write>(
        &self,
        theme: &ReportTheme,
        category: &CategoryReport,
        writer: &mut W,
    ) -> std::io::Result<()> {
        for check in &category.checks {
            let path = check.detail.as_deref().unwrap_or_default();
            let line = if check.passed {
                format!("{}: {}", check.description, path)
            } else {
                format!(
                    "{}: {} - {}",
                    check.description,
                    path,
                    self.locale.file_missing()
                )
            };
            writeln!(writer, "{}", theme.format_check(check.passed, &line))?;
        }
        Ok(())
    }

    fn rule_line(&self, check: &CheckResult) -> String {
        match check.detail.as_deref() {
            None => check.description.clone(),
            Some(NOT_FOUND) => format!(
                "{} - {}",
                check.description,
                self.locale.pattern_missing()
            ),
            Some(other) => format!("{} - {}", check.description, other),
        }
    }

    fn write_content<W: Write>(
        &self,
        theme: &ReportTheme,
        category: &CategoryReport,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let label = if category.description.is_empty() {
            &category.title
        } else {
            &category.description
        };

        match &category.failure {
            Some(ReadFailure::FileNotFound { path }) => {
                let line = format!("{}: {} {}", label, self.locale.file_missing(), path);
                writeln!(writer, "{}", theme.format_check(false, &line))
            }
            Some(ReadFailure::ReadError { message, .. }) => {
                let line = format!("{}: {} - {}", label, self.locale.read_failed(), message);
                writeln!(writer, "{}", theme.format_check(false, &line))
            }
            None => {
                for check in &category.checks {
                    writeln!(
                        writer,
                        "  {}",
                        theme.format_check(check.passed, &self.rule_line(check))
                    )?;
                }
                Ok(())
            }
        }
    }

    fn write_verdict<W: Write>(
        &self,
        theme: &ReportTheme,
        summary: &Summary,
        writer: &mut W,
    ) -> std::io::Result<()> {
        if !summary.is_success() {
            let line = self.locale.needs_fixes(&summary.subject, summary.failed());
            return writeln!(writer, "{}", theme.warning.apply_to(format!("⚠ {}", line)));
        }

        let line = self.locale.success(&summary.subject);
        writeln!(writer, "{}", theme.success.apply_to(format!("🎉 {}", line)))?;

        if !summary.next_steps.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "{}", self.locale.next_steps_heading())?;
            for (i, step) in summary.next_steps.iter().enumerate() {
                writeln!(writer, "{}. {}", i + 1, step)?;
            }
        }
        if !summary.notes.is_empty() {
            writeln!(writer)?;
            for note in &summary.notes {
                writeln!(writer, "{}", note)?;
            }
        }
        Ok(())
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, summary: &Summary, writer: &mut W) -> std::io::Result<()> {
        let theme = self.theme();

        writeln!(
            writer,
            "{}",
            theme.format_header(&format!("=== {} ===", summary.title))
        )?;
        writeln!(writer)?;

        for (i, category) in summary.categories.iter().enumerate() {
            let heading = match category.kind {
                CategoryKind::Existence => self.locale.existence_heading(),
                CategoryKind::Content { .. } => category.title.as_str(),
            };
            writeln!(
                writer,
                "{}",
                theme.format_header(&format!("{}. {}:", i + 1, heading))
            )?;

            match category.kind {
                CategoryKind::Existence => self.write_existence(&theme, category, writer)?,
                CategoryKind::Content { .. } => self.write_content(&theme, category, writer)?,
            }
            writeln!(writer)?;
        }

        writeln!(
            writer,
            "{}",
            theme.format_header(&format!("=== {} ===", self.locale.summary_heading()))
        )?;
        writeln!(
            writer,
            "{}",
            self.locale.passed_checks(summary.passed(), summary.total())
        )?;
        writeln!(writer, "{}", self.locale.completion(summary.percentage()))?;
        writeln!(writer)?;

        self.write_verdict(&theme, summary, writer)
    }
}
