//! Visual theme and styling.

use console::Style;

/// Width of the rule drawn around banner headers.
pub const BANNER_WIDTH: usize = 60;

/// Width of the rule drawn under numbered step titles.
pub const STEP_RULE_WIDTH: usize = 40;

/// ragsetup's visual theme.
#[derive(Debug, Clone)]
pub struct SetupTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for step titles (bold).
    pub step_title: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
    /// Style for box-drawing borders and rules (dim).
    pub border: Style,
    /// Style for contextual hints (dim).
    pub hint: Style,
}

impl Default for SetupTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            step_title: Style::new().bold(),
            header: Style::new().bold().magenta(),
            border: Style::new().dim(),
            hint: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            step_title: Style::new(),
            header: Style::new(),
            border: Style::new(),
            hint: Style::new(),
        }
    }

    /// Pick the colored or plain theme for the current terminal.
    pub fn for_terminal() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a banner header: the title between two full-width rules.
    pub fn format_header(&self, title: &str) -> String {
        let rule = self.border.apply_to("=".repeat(BANNER_WIDTH));
        format!(
            "{}\n  {}\n{}",
            rule,
            self.header.apply_to(title),
            rule
        )
    }

    /// Format a numbered step title with its underline.
    pub fn format_step(&self, index: usize, title: &str) -> String {
        format!(
            "{}\n{}",
            self.step_title.apply_to(format!("{}. {}", index, title)),
            self.border.apply_to("-".repeat(STEP_RULE_WIDTH))
        )
    }

    /// Format a secondary detail line.
    pub fn format_hint(&self, hint: &str) -> String {
        format!("   {}", self.hint.apply_to(hint))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = SetupTheme::plain();
        let msg = theme.format_success("Complete");
        assert_eq!(msg, "✓ Complete");
    }

    #[test]
    fn theme_formats_warning() {
        let theme = SetupTheme::plain();
        let msg = theme.format_warning("Caution");
        assert_eq!(msg, "⚠ Caution");
    }

    #[test]
    fn theme_formats_error() {
        let theme = SetupTheme::plain();
        let msg = theme.format_error("Failed");
        assert_eq!(msg, "✗ Failed");
    }

    #[test]
    fn header_is_framed_by_rules() {
        let theme = SetupTheme::plain();
        let header = theme.format_header("Setup Complete!");
        let lines: Vec<&str> = header.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "=".repeat(BANNER_WIDTH));
        assert_eq!(lines[1], "  Setup Complete!");
        assert_eq!(lines[2], "=".repeat(BANNER_WIDTH));
    }

    #[test]
    fn step_is_numbered_and_underlined() {
        let theme = SetupTheme::plain();
        let step = theme.format_step(3, "Testing Streamlit");
        assert_eq!(
            step,
            format!("3. Testing Streamlit\n{}", "-".repeat(STEP_RULE_WIDTH))
        );
    }

    #[test]
    fn hint_is_indented() {
        let theme = SetupTheme::plain();
        assert_eq!(theme.format_hint("Version: 1.2.3"), "   Version: 1.2.3");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = SetupTheme::default();
        let new = SetupTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
