//! Unified status vocabulary for consistent CLI output.
//!
//! `StatusKind` provides the canonical set of status icons used by every
//! stage of the setup report.

/// Canonical status kinds used across all ragsetup output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Success,
    /// Check failed.
    Failed,
    /// Check was skipped.
    Skipped,
    /// Non-fatal warning.
    Warning,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Skipped => "○",
            Self::Warning => "⚠",
        }
    }
}
