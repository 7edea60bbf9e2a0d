//! Reload command implementation
//!
//! Gracefully reloads site stack services in place. nginx validates its
//! configuration before the reload signal; php signals its master process;
//! the database has no reload operation and is skipped.

use anyhow::Result;
use clap::Args;
use sitestack_core::{StackAction, StackRequest};

use super::{component_set_from_flags, run_stack};

/// Arguments for the reload command
#[derive(Args)]
pub struct ReloadArgs {
    /// Name of the site whose stack should be reloaded
    pub site: Option<String>,

    /// Reload nginx (validates the configuration first)
    #[arg(long)]
    pub nginx: bool,

    /// Reload php by signalling the master process
    #[arg(long)]
    pub php: bool,

    /// Accepted for symmetry with restart; the database has no reload
    /// operation and is skipped
    #[arg(long)]
    pub db: bool,

    /// Reload every reloadable service; without a site name, every site
    #[arg(long)]
    pub all: bool,

    /// Answer yes to the bulk confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

/// Reload the selected site stacks in place.
pub fn cmd_reload(args: &ReloadArgs, quiet: bool) -> Result<()> {
    let request = StackRequest {
        site: args.site.clone(),
        all: args.all,
        components: component_set_from_flags(args.nginx, args.php, args.db),
    };
    run_stack(request, StackAction::Reload, args.yes, quiet)
}
