//! Pattern validation.
//!
//! The validator runs a [`Suite`] against a project root:
//!
//! 1. One existence category covering every [`CheckTarget`](crate::suite::CheckTarget)
//! 2. One content category per [`RuleGroup`](crate::suite::RuleGroup), in order
//!
//! Every check runs sequentially. File problems never abort the run; they
//! turn into failed checks and the next category is evaluated.
//!
//! # Example
//!
//! ```
//! use bspcheck::suite::{CheckTarget, ContentRule, RuleGroup, Suite};
//! use bspcheck::validator::run_suite;
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("a.txt"), "BSP_USING_RTC enabled").unwrap();
//!
//! let suite = Suite {
//!     name: "demo".into(),
//!     title: "Demo".into(),
//!     subject: "Demo integration".into(),
//!     targets: vec![CheckTarget::new("a.txt", "A")],
//!     groups: vec![RuleGroup {
//!         title: "A contents".into(),
//!         path: "a.txt".into(),
//!         description: String::new(),
//!         rules: vec![ContentRule::new("bsp_using_rtc", "RTC switch")],
//!     }],
//!     next_steps: vec![],
//!     notes: vec![],
//! };
//!
//! let summary = run_suite(dir.path(), &suite);
//! assert_eq!(summary.exit_code(), 0);
//! ```

pub mod result;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use regex::RegexBuilder;

pub use result::{CategoryKind, CategoryReport, CheckResult, ContentReport, ReadFailure, Summary};

use crate::error::{CheckError, Result};
use crate::suite::{CheckTarget, ContentRule, RuleGroup, Suite};

/// Check if an entry exists relative to the project root.
pub fn file_exists(project_root: &Path, path: &str) -> bool {
    project_root.join(path).exists()
}

/// Read a file relative to the project root as UTF-8 text.
///
/// # Errors
///
/// Returns `FileNotFound` if nothing exists at the path and `ReadError` if
/// the file cannot be read or decoded.
pub fn read_text(project_root: &Path, path: &str) -> Result<String> {
    let full = project_root.join(path);
    fs::read_to_string(&full).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CheckError::FileNotFound { path: path.into() },
        _ => CheckError::ReadError {
            path: path.into(),
            message: e.to_string(),
        },
    })
}

/// Search `text` for one rule, ignoring case.
///
/// A pattern that does not compile fails the rule with the compiler message.
pub fn match_rule(text: &str, rule: &ContentRule) -> CheckResult {
    match RegexBuilder::new(&rule.pattern)
        .case_insensitive(true)
        .build()
    {
        Ok(re) if re.is_match(text) => CheckResult::pass(&rule.description),
        Ok(_) => CheckResult::fail(&rule.description).with_detail("not found"),
        Err(e) => {
            tracing::warn!("Invalid pattern '{}': {}", rule.pattern, e);
            CheckResult::fail(&rule.description).with_detail(format!("invalid pattern: {}", e))
        }
    }
}

/// Check one file against a list of rules.
///
/// A missing or unreadable file reports every rule failed.
pub fn content_matches(project_root: &Path, path: &str, rules: &[ContentRule]) -> ContentReport {
    tracing::debug!("Checking {} against {} rule(s)", path, rules.len());

    let text = match read_text(project_root, path) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!("{}", e);
            return ContentReport {
                all_matched: false,
                results: rules
                    .iter()
                    .map(|r| CheckResult::fail(&r.description))
                    .collect(),
                failure: ReadFailure::from_error(&e),
            };
        }
    };

    let results: Vec<CheckResult> = rules.iter().map(|r| match_rule(&text, r)).collect();
    ContentReport {
        all_matched: results.iter().all(|r| r.passed),
        results,
        failure: None,
    }
}

/// Check that every target exists.
pub fn check_existence(project_root: &Path, targets: &[CheckTarget]) -> CategoryReport {
    let checks: Vec<CheckResult> = targets
        .iter()
        .map(|t| {
            let result = if file_exists(project_root, &t.path) {
                CheckResult::pass(&t.description)
            } else {
                tracing::debug!("Missing target {}", t.path);
                CheckResult::fail(&t.description)
            };
            result.with_detail(&t.path)
        })
        .collect();

    CategoryReport {
        title: "File existence".into(),
        description: String::new(),
        kind: CategoryKind::Existence,
        passed: checks.iter().all(|c| c.passed),
        checks,
        failure: None,
    }
}

/// Check one rule group.
pub fn check_group(project_root: &Path, group: &RuleGroup) -> CategoryReport {
    let report = content_matches(project_root, &group.path, &group.rules);
    CategoryReport {
        title: group.title.clone(),
        description: group.description.clone(),
        kind: CategoryKind::Content {
            path: group.path.clone(),
        },
        checks: report.results,
        failure: report.failure,
        passed: report.all_matched,
    }
}

/// Run a whole suite against a project root.
pub fn run_suite(project_root: &Path, suite: &Suite) -> Summary {
    tracing::debug!(
        "Running suite '{}' in {}",
        suite.name,
        project_root.display()
    );

    let mut categories = Vec::with_capacity(suite.category_count());
    categories.push(check_existence(project_root, &suite.targets));
    for group in &suite.groups {
        categories.push(check_group(project_root, group));
    }

    let summary = Summary {
        suite: suite.name.clone(),
        title: suite.title.clone(),
        subject: suite.subject.clone(),
        categories,
        next_steps: suite.next_steps.clone(),
        notes: suite.notes.clone(),
    };

    tracing::info!(
        "Suite '{}': {}/{} categories passed",
        summary.suite,
        summary.passed(),
        summary.total()
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Locale;
    use tempfile::TempDir;

    fn suite_for_a() -> Suite {
        Suite {
            name: "a".into(),
            title: "A".into(),
            subject: "A integration".into(),
            targets: vec![CheckTarget::new("a.txt", "A")],
            groups: vec![RuleGroup {
                title: "A contents".into(),
                path: "a.txt".into(),
                description: "A file".into(),
                rules: vec![ContentRule::new("BSP_USING_RTC", "RTC switch")],
            }],
            next_steps: vec![],
            notes: vec![],
        }
    }

    #[test]
    fn file_exists_helper() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("test.txt"), "").unwrap();
        fs::create_dir_all(temp.path().join("board")).unwrap();

        assert!(file_exists(temp.path(), "test.txt"));
        assert!(file_exists(temp.path(), "board"));
        assert!(!file_exists(temp.path(), "missing.txt"));
    }

    #[test]
    fn content_matches_ignores_case() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("rtc_msh.c"), "static void RTC_READ(void);").unwrap();

        let report = content_matches(
            temp.path(),
            "rtc_msh.c",
            &[ContentRule::new("rtc_read", "read command")],
        );
        assert!(report.all_matched);
        assert!(report.results[0].passed);
        assert!(report.failure.is_none());
    }

    #[test]
    fn content_matches_reports_missing_pattern() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("rtc_msh.c"), "rtc_read rtc_set").unwrap();

        let report = content_matches(
            temp.path(),
            "rtc_msh.c",
            &[
                ContentRule::new("rtc_read", "read"),
                ContentRule::new("rtc_help", "help"),
            ],
        );
        assert!(!report.all_matched);
        assert!(report.results[0].passed);
        assert!(!report.results[1].passed);
        assert_eq!(report.results[1].detail.as_deref(), Some("not found"));
    }

    #[test]
    fn content_matches_regex_spans_whitespace() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("Kconfig"),
            "menuconfig BSP_USING_RTC\n    config   bsp_using_rtc\n",
        )
        .unwrap();

        let report = content_matches(
            temp.path(),
            "Kconfig",
            &[ContentRule::new(r"config\s+BSP_USING_RTC", "option")],
        );
        assert!(report.all_matched);
    }

    #[test]
    fn missing_file_fails_every_rule() {
        let temp = TempDir::new().unwrap();
        let rules = vec![
            ContentRule::new("a", "a"),
            ContentRule::new("b", "b"),
        ];

        let report = content_matches(temp.path(), "gone.c", &rules);
        assert!(!report.all_matched);
        assert_eq!(report.results.len(), 2);
        assert!(report.results.iter().all(|r| !r.passed));
        assert!(matches!(
            report.failure,
            Some(ReadFailure::FileNotFound { .. })
        ));
    }

    #[test]
    fn undecodable_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("blob.bin"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let report = content_matches(temp.path(), "blob.bin", &[ContentRule::new("x", "x")]);
        assert!(!report.all_matched);
        assert!(matches!(report.failure, Some(ReadFailure::ReadError { .. })));
    }

    #[test]
    fn directory_is_read_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("board")).unwrap();

        let err = read_text(temp.path(), "board").unwrap_err();
        assert!(matches!(err, CheckError::ReadError { .. }));
    }

    #[test]
    fn invalid_pattern_fails_only_that_rule() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "rtc_read").unwrap();

        let report = content_matches(
            temp.path(),
            "a.txt",
            &[
                ContentRule::new("rtc_(", "broken"),
                ContentRule::new("rtc_read", "read"),
            ],
        );
        assert!(!report.all_matched);
        assert!(!report.results[0].passed);
        assert!(report.results[0]
            .detail
            .as_deref()
            .unwrap()
            .starts_with("invalid pattern"));
        assert!(report.results[1].passed);
    }

    #[test]
    fn run_suite_passes_when_everything_matches() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "BSP_USING_RTC enabled").unwrap();

        let summary = run_suite(temp.path(), &suite_for_a());
        assert_eq!(summary.total(), 2);
        assert_eq!(summary.passed(), 2);
        assert_eq!(summary.exit_code(), 0);
    }

    #[test]
    fn run_suite_missing_file_fails_both_categories() {
        let temp = TempDir::new().unwrap();

        let summary = run_suite(temp.path(), &suite_for_a());
        assert_eq!(summary.exit_code(), 1);
        assert!(!summary.categories[0].passed);
        assert!(!summary.categories[1].passed);
        assert!(summary.categories[1].checks.iter().all(|c| !c.passed));
    }

    #[test]
    fn run_suite_keeps_group_order() {
        let temp = TempDir::new().unwrap();
        let suite = Suite::builtin("rtc", Locale::En).unwrap();

        let summary = run_suite(temp.path(), &suite);
        assert_eq!(summary.total(), 6);
        assert_eq!(summary.categories[0].kind, CategoryKind::Existence);
        let titles: Vec<_> = summary.categories[1..].iter().map(|c| &c.title).collect();
        let expected: Vec<_> = suite.groups.iter().map(|g| &g.title).collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn existence_checks_carry_path() {
        let temp = TempDir::new().unwrap();
        let report = check_existence(temp.path(), &[CheckTarget::new("board/Kconfig", "Kconfig")]);
        assert_eq!(report.checks[0].detail.as_deref(), Some("board/Kconfig"));
        assert!(!report.passed);
    }
}
