//! Report formatters.
//!
//! This module provides formatters for writing a run [`Summary`] in
//! different formats (human-readable, plain ASCII, JSON).

pub mod human;
pub mod json;
pub mod locale;
pub mod plain;
pub mod theme;

use std::io::Write;
use std::str::FromStr;

use crate::validator::Summary;

/// Output format for run reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Plain,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

/// Trait for formatting run reports.
pub trait ReportFormatter {
    /// Format the summary to the given writer.
    fn format<W: Write>(&self, summary: &Summary, writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
pub use locale::Locale;
pub use plain::PlainFormatter;
pub use theme::{should_use_colors, ReportTheme};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_from_str() {
        assert_eq!("human".parse::<OutputFormat>(), Ok(OutputFormat::Human));
        assert_eq!("PLAIN".parse::<OutputFormat>(), Ok(OutputFormat::Plain));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("sarif".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Human);
    }
}
