//! Plain ASCII output formatter.
//!
//! `[OK]` / `[FAIL]` lines with no color and no non-ASCII marks, for logs
//! and terminals that cannot render either.

use std::io::Write;

use super::ReportFormatter;
use crate::validator::{CategoryKind, ReadFailure, Summary};

/// Formats run output as plain ASCII lines.
#[derive(Debug, Default)]
pub struct PlainFormatter;

impl PlainFormatter {
    /// Create a new plain formatter.
    pub fn new() -> Self {
        Self
    }

    fn mark(passed: bool) -> &'static str {
        if passed {
            "[OK]"
        } else {
            "[FAIL]"
        }
    }
}

impl ReportFormatter for PlainFormatter {
    fn format<W: Write>(&self, summary: &Summary, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "=== {} ===", summary.title)?;
        writeln!(writer)?;

        for (i, category) in summary.categories.iter().enumerate() {
            match &category.kind {
                CategoryKind::Existence => {
                    writeln!(writer, "{}. File Existence Check:", i + 1)?;
                    for check in &category.checks {
                        let path = check.detail.as_deref().unwrap_or_default();
                        if check.passed {
                            writeln!(writer, "[OK] {}: {}", check.description, path)?;
                        } else {
                            writeln!(
                                writer,
                                "[FAIL] {}: {} - File not found",
                                check.description, path
                            )?;
                        }
                    }
                }
                CategoryKind::Content { .. } => {
                    writeln!(writer, "{}. {}:", i + 1, category.title)?;
                    match &category.failure {
                        Some(ReadFailure::FileNotFound { path }) => {
                            writeln!(writer, "[FAIL] {} not found", path)?;
                        }
                        Some(ReadFailure::ReadError { path, message }) => {
                            writeln!(writer, "[FAIL] {} unreadable: {}", path, message)?;
                        }
                        None => {
                            for check in &category.checks {
                                match check.detail.as_deref() {
                                    Some(detail) if !check.passed => writeln!(
                                        writer,
                                        "{} {} ({})",
                                        Self::mark(false),
                                        check.description,
                                        detail
                                    )?,
                                    _ => writeln!(
                                        writer,
                                        "{} {}",
                                        Self::mark(check.passed),
                                        check.description
                                    )?,
                                }
                            }
                        }
                    }
                }
            }
            writeln!(writer)?;
        }

        writeln!(writer, "=== Test Summary ===")?;
        writeln!(
            writer,
            "Passed: {}/{} ({:.1}%)",
            summary.passed(),
            summary.total(),
            summary.percentage()
        )?;

        if summary.is_success() {
            writeln!(writer, "SUCCESS: {} is complete!", summary.subject)?;
            if !summary.next_steps.is_empty() {
                writeln!(writer)?;
                writeln!(writer, "Next steps:")?;
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
        } else {
            writeln!(writer, "WARNING: {} needs fixes", summary.subject)?;
        }

        Ok(())
    }
}
