//! Suite file discovery and loading.
//!
//! Suite files are YAML documents with the same shape as [`Suite`]:
//!
//! ```yaml
//! name: rtc-kconfig
//! title: RTC Kconfig check
//! subject: RTC configuration
//! targets:
//!   - path: board/Kconfig
//!     description: Hardware configuration
//! groups:
//!   - title: Kconfig configuration
//!     path: board/Kconfig
//!     rules:
//!       - pattern: 'config\s+BSP_USING_RTC'
//!         description: BSP_USING_RTC option
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use regex::RegexBuilder;

use super::{builtin, Suite};
use crate::error::{CheckError, Result};
use crate::output::Locale;

/// Suite file locations for a project.
#[derive(Debug, Clone)]
pub struct SuitePaths {
    /// Project suite: .bspcheck/suite.yml
    pub project: Option<PathBuf>,
}

impl SuitePaths {
    /// Discover suite files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: Self::find_project_suite(project_root),
        }
    }

    fn find_project_suite(project_root: &Path) -> Option<PathBuf> {
        let path = project_root.join(".bspcheck").join("suite.yml");
        if path.is_file() {
            Some(path)
        } else {
            None
        }
    }
}

/// Pick the suite for a run.
///
/// 1. `selector` naming a built-in suite
/// 2. `selector` as a path (relative to `project_root`, then as given)
/// 3. no selector: `.bspcheck/suite.yml` under `project_root`
/// 4. no selector: the default built-in
///
/// Built-in suites carry their descriptions in `locale`; suite files are
/// used as written.
///
/// # Errors
///
/// Returns `UnknownSuite` if the selector matches nothing, plus any error
/// from [`load_suite_file`].
pub fn resolve_suite(
    project_root: &Path,
    selector: Option<&str>,
    locale: Locale,
) -> Result<Suite> {
    match selector {
        Some(name) => {
            if let Some(suite) = builtin::get(name, locale) {
                tracing::debug!("Using built-in suite '{}'", name);
                return Ok(suite);
            }
            let under_root = project_root.join(name);
            let candidate = if under_root.is_file() {
                under_root
            } else {
                PathBuf::from(name)
            };
            if candidate.is_file() {
                load_suite_file(&candidate)
            } else {
                Err(CheckError::UnknownSuite {
                    name: name.to_string(),
                })
            }
        }
        None => match SuitePaths::discover(project_root).project {
            Some(path) => load_suite_file(&path),
            None => {
                tracing::debug!("No project suite, using '{}'", builtin::DEFAULT_SUITE);
                builtin::get(builtin::DEFAULT_SUITE, locale).ok_or_else(|| CheckError::UnknownSuite {
                    name: builtin::DEFAULT_SUITE.to_string(),
                })
            }
        },
    }
}

/// Load and validate a suite file.
///
/// # Errors
///
/// Returns `SuiteNotFound` if the file doesn't exist.
/// Returns `SuiteParseError` if the YAML is invalid.
/// Returns `SuiteValidationError` if the suite is structurally wrong.
pub fn load_suite_file(path: &Path) -> Result<Suite> {
    tracing::debug!("Loading suite from {}", path.display());
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CheckError::SuiteNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CheckError::Io(e)
        }
    })?;

    let suite = parse_suite(&content, path)?;
    validate_suite(&suite)?;
    Ok(suite)
}

/// Parse YAML content into a Suite.
pub fn parse_suite(content: &str, source_path: &Path) -> Result<Suite> {
    serde_yaml::from_str(content).map_err(|e| CheckError::SuiteParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Reject suites that cannot produce a meaningful run.
pub fn validate_suite(suite: &Suite) -> Result<()> {
    if suite.name.trim().is_empty() {
        return Err(CheckError::SuiteValidationError {
            message: "suite name must not be empty".into(),
        });
    }
    if suite.targets.is_empty() && suite.groups.is_empty() {
        return Err(CheckError::SuiteValidationError {
            message: format!("suite '{}' has no targets and no groups", suite.name),
        });
    }
    for group in &suite.groups {
        if group.rules.is_empty() {
            return Err(CheckError::SuiteValidationError {
                message: format!("group '{}' has no rules", group.title),
            });
        }
        for rule in &group.rules {
            RegexBuilder::new(&rule.pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| CheckError::SuiteValidationError {
                    message: format!("group '{}': {}", group.title, e),
                })?;
        }
    }
    Ok(())
}
