//! Check outcomes and aggregation.

use serde::Serialize;

use crate::error::CheckError;

/// Outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub description: String,
    pub passed: bool,
    /// Path for existence checks, failure reason for content checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CheckResult {
    pub fn pass(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            passed: true,
            detail: None,
        }
    }

    pub fn fail(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            passed: false,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Why a file's content could not be checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReadFailure {
    /// Nothing exists at the path.
    FileNotFound { path: String },
    /// The path exists but is not readable UTF-8 text.
    ReadError { path: String, message: String },
}

impl ReadFailure {
    /// Map the validator's read errors; other errors have no read failure.
    pub fn from_error(err: &CheckError) -> Option<Self> {
        match err {
            CheckError::FileNotFound { path } => Some(ReadFailure::FileNotFound {
                path: path.display().to_string(),
            }),
            CheckError::ReadError { path, message } => Some(ReadFailure::ReadError {
                path: path.display().to_string(),
                message: message.clone(),
            }),
            _ => None,
        }
    }
}

/// Result of checking one file against its rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentReport {
    /// True iff the file was read and every rule matched.
    pub all_matched: bool,
    /// One entry per rule, in rule order.
    pub results: Vec<CheckResult>,
    /// Set when the file could not be read; every result is then failed.
    pub failure: Option<ReadFailure>,
}

/// What a category aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CategoryKind {
    /// Presence of every target file.
    Existence,
    /// Content rules of one file.
    Content { path: String },
}

/// One aggregated category of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryReport {
    pub title: String,
    /// Group description, used when the file could not be read.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(flatten)]
    pub kind: CategoryKind,
    pub checks: Vec<CheckResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<ReadFailure>,
    pub passed: bool,
}

/// Aggregate result of a suite run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Suite name.
    pub suite: String,
    /// Suite banner.
    pub title: String,
    /// What was checked, used in the verdict line.
    pub subject: String,
    pub categories: Vec<CategoryReport>,
    #[serde(skip)]
    pub next_steps: Vec<String>,
    #[serde(skip)]
    pub notes: Vec<String>,
}

impl Summary {
    /// Number of categories that passed.
    pub fn passed(&self) -> usize {
        self.categories.iter().filter(|c| c.passed).count()
    }

    /// Number of categories.
    pub fn total(&self) -> usize {
        self.categories.len()
    }

    /// Number of categories that need fixing.
    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// Share of passed categories, 0 to 100. An empty run counts as complete.
    pub fn percentage(&self) -> f64 {
        if self.categories.is_empty() {
            100.0
        } else {
            self.passed() as f64 / self.total() as f64 * 100.0
        }
    }

    /// True iff every category passed.
    pub fn is_success(&self) -> bool {
        self.passed() == self.total()
    }

    /// Process exit status: 0 iff every category passed.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}
