//! bspcheck - Pattern-based validation of BSP driver integrations.
//!
//! bspcheck confirms that a driver integration in a board support package
//! has been wired up: the expected files exist and contain the expected
//! configuration symbols, function names and command registrations.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`output`] - Report formatters (human, plain, JSON)
//! - [`suite`] - Check suites, built-in and file-based
//! - [`validator`] - File existence and content pattern checks
//!
//! # Example
//!
//! ```
//! use bspcheck::suite::ContentRule;
//! use bspcheck::validator::content_matches;
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("rtc_msh.c"), "MSH_CMD_EXPORT(RTC_READ, ...)").unwrap();
//!
//! let report = content_matches(
//!     dir.path(),
//!     "rtc_msh.c",
//!     &[ContentRule::new("rtc_read", "rtc_read command")],
//! );
//! assert!(report.all_matched);
//! ```

pub mod cli;
pub mod error;
pub mod output;
pub mod suite;
pub mod validator;

pub use error::{CheckError, Result};
