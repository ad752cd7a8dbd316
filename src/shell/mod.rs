//! Subprocess execution and process environment.

pub mod command;
pub mod platform;

pub use command::{display_command, execute, CommandOptions, CommandResult};
pub use platform::{default_python, install_interrupt_handler, is_ci, INTERRUPT_MESSAGE};
