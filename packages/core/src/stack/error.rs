//! Stack orchestration errors

use std::io;
use thiserror::Error;

/// Errors that abort a stack run before any action executes.
///
/// Failures of individual component actions are deliberately not errors:
/// they are reported and the batch continues.
#[derive(Debug, Error)]
pub enum StackError {
    /// The positional site name matched no registered site.
    #[error("Site {0} does not exist.")]
    UnknownSite(String),

    /// Neither a site name nor the bulk flag was supplied.
    #[error("Please specify a site name or the (possibly dangerous) `--all` flag for all the sites.")]
    NoSelector,

    /// A site was named but no component was selected.
    #[error("No component selected. Pass --nginx, --php, --db, or --all.")]
    NoComponents,

    /// The confirmation prompt itself failed (not a decline).
    #[error("confirmation prompt failed: {0}")]
    Prompt(#[source] io::Error),
}
