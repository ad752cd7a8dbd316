//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which resolves the
//! configuration once and routes CLI subcommands to their implementations.
//! `run` drives the whole pipeline; the other setup commands run a single
//! stage through the same stage functions.

pub mod completions;
pub mod deps;
pub mod dispatcher;
pub mod env;
pub mod probe;
pub mod python;
pub mod run;
pub mod template;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
