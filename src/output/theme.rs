//! Visual theme for human-readable reports.

use console::Style;

/// Styles used by [`HumanFormatter`](super::HumanFormatter).
#[derive(Debug, Clone)]
pub struct ReportTheme {
    /// Passed checks and the success verdict (green).
    pub success: Style,
    /// Failed checks (red bold).
    pub error: Style,
    /// Failure verdict (orange).
    pub warning: Style,
    /// Banners and section headings (bold magenta).
    pub header: Style,
}

impl Default for ReportTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            warning: Style::new().color256(208),
            header: Style::new().bold().magenta(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            warning: Style::new(),
            header: Style::new(),
        }
    }

    /// Pass or fail mark followed by the message.
    pub fn format_check(&self, passed: bool, msg: &str) -> String {
        if passed {
            format!("{}", self.success.apply_to(format!("✓ {}", msg)))
        } else {
            format!("{}", self.error.apply_to(format!("✗ {}", msg)))
        }
    }

    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
