//! JSON output formatter.
//!
//! Formats a run as machine-readable JSON for tooling integration.

use std::io::Write;

use serde::Serialize;

use super::ReportFormatter;
use crate::validator::{CategoryReport, Summary};

/// Formats run output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    suite: &'a str,
    title: &'a str,
    categories: &'a [CategoryReport],
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSummary {
    passed: usize,
    total: usize,
    percentage: f64,
    success: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, summary: &Summary, writer: &mut W) -> std::io::Result<()> {
        let output = JsonOutput {
            suite: &summary.suite,
            title: &summary.title,
            categories: &summary.categories,
            summary: JsonSummary {
                passed: summary.passed(),
                total: summary.total(),
                percentage: (summary.percentage() * 10.0).round() / 10.0,
                success: summary.is_success(),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
