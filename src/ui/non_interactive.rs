//! Non-interactive UI for CI and piped output.

use super::theme::SetupTheme;
use super::{OutputMode, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Writes plain, uncolored lines. Warnings and errors go to stderr so a
/// piped report still surfaces problems on the console.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: SetupTheme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: SetupTheme::plain(),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_header(&mut self, title: &str) {
        println!("\n{}", self.theme.format_header(title));
    }

    fn show_step(&mut self, index: usize, title: &str) {
        println!("\n{}", self.theme.format_step(index, title));
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_details() {
            println!("{}", self.theme.format_hint(hint));
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_details() {
            println!("{}", message);
        }
        Box::new(NoopSpinner {
            theme: self.theme.clone(),
        })
    }
}

/// Spinner that does not animate (for non-interactive mode).
struct NoopSpinner {
    theme: SetupTheme,
}

impl SpinnerHandle for NoopSpinner {
    fn finish_success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }
}
