//! Check suites.
//!
//! A [`Suite`] is the full list of what a run looks at: files that must
//! exist ([`CheckTarget`]) and, per file, the text patterns expected inside
//! it ([`RuleGroup`] of [`ContentRule`]s).
//!
//! Suites come from two places:
//!
//! - [`builtin`] - the hard-coded RTC integration suites
//! - [`loader`] - YAML suite files
//!
//! # Example
//!
//! ```
//! use bspcheck::suite::Suite;
//!
//! use bspcheck::output::Locale;
//!
//! let suite = Suite::builtin("rtc", Locale::En).unwrap();
//! assert_eq!(suite.targets.len(), 6);
//! assert_eq!(suite.groups[0].path, "board/Kconfig");
//! ```

pub mod builtin;
pub mod loader;

use serde::{Deserialize, Serialize};

use crate::output::Locale;

pub use builtin::{builtin_names, DEFAULT_SUITE};
pub use loader::{load_suite_file, resolve_suite, validate_suite, SuitePaths};

/// A file expected to exist, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckTarget {
    /// Repository-relative path.
    pub path: String,
    /// What the file is.
    pub description: String,
}

impl CheckTarget {
    pub fn new(path: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            description: description.into(),
        }
    }
}

/// A regex expected to match somewhere in a file's text.
///
/// Matching is always case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRule {
    pub pattern: String,
    pub description: String,
}

impl ContentRule {
    pub fn new(pattern: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            description: description.into(),
        }
    }
}

/// The content rules for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleGroup {
    /// Section heading shown in reports.
    pub title: String,
    /// File the rules are checked against.
    pub path: String,
    /// What the group verifies, used in read-failure messages.
    #[serde(default)]
    pub description: String,
    pub rules: Vec<ContentRule>,
}

/// A named list of targets and rule groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suite {
    /// Short identifier (e.g. `rtc`).
    pub name: String,
    /// Report banner.
    pub title: String,
    /// What is being integrated, used in the closing verdict.
    pub subject: String,
    #[serde(default)]
    pub targets: Vec<CheckTarget>,
    #[serde(default)]
    pub groups: Vec<RuleGroup>,
    /// Shown after a fully passing run.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next_steps: Vec<String>,
    /// Extra lines shown after a fully passing run.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl Suite {
    /// Look up a built-in suite by name, with descriptions in `locale`.
    pub fn builtin(name: &str, locale: Locale) -> Option<Suite> {
        builtin::get(name, locale)
    }

    /// Number of aggregate categories a run of this suite produces.
    pub fn category_count(&self) -> usize {
        1 + self.groups.len()
    }

    /// Total number of individual checks (existence plus content rules).
    pub fn check_count(&self) -> usize {
        self.targets.len() + self.groups.iter().map(|g| g.rules.len()).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Suite {
        Suite {
            name: "sample".into(),
            title: "Sample".into(),
            subject: "Sample integration".into(),
            targets: vec![CheckTarget::new("a.txt", "A")],
            groups: vec![RuleGroup {
                title: "A contents".into(),
                path: "a.txt".into(),
                description: "A file".into(),
                rules: vec![
                    ContentRule::new("BSP_USING_RTC", "RTC switch"),
                    ContentRule::new("rtc_read", "read command"),
                ],
            }],
            next_steps: vec![],
            notes: vec![],
        }
    }

    #[test]
    fn counts_categories_and_checks() {
        let suite = sample();
        assert_eq!(suite.category_count(), 2);
        assert_eq!(suite.check_count(), 3);
    }

    #[test]
    fn builtin_lookup() {
        assert!(Suite::builtin("rtc", Locale::En).is_some());
        assert!(Suite::builtin("rtc-quick", Locale::ZhCn).is_some());
        assert!(Suite::builtin("uart", Locale::En).is_none());
    }
}
