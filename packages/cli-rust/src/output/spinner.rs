//! Spinner helper for long-running commands

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while an engine command runs.
///
/// Construction is quiet-aware: with `quiet` set, every method is a no-op
/// so callers never have to branch.
pub struct CommandSpinner {
    bar: Option<ProgressBar>,
}

impl CommandSpinner {
    pub fn new_maybe(message: &str, quiet: bool) -> Self {
        if quiet {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("valid template"),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    /// Clear the spinner so captured output can take its place.
    pub fn clear(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
