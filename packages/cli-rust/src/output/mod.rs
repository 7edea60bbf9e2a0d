//! Output utilities for CLI commands
//!
//! This module provides terminal output helpers: the console reporter for
//! stack runs (site brackets, per-action spinners, captured output), the
//! spinner wrapper, and the interactive confirmation gate.

mod prompt;
mod reporter;
mod spinner;

pub use prompt::PromptGate;
pub use reporter::ConsoleReporter;
pub use spinner::CommandSpinner;
