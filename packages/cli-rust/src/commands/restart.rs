//! Restart command implementation
//!
//! Fully restarts site stack containers (stop + start) for the selected
//! components.

use anyhow::Result;
use clap::Args;
use sitestack_core::{StackAction, StackRequest};

use super::{component_set_from_flags, run_stack};

/// Arguments for the restart command
#[derive(Args)]
pub struct RestartArgs {
    /// Name of the site whose stack should be restarted
    pub site: Option<String>,

    /// Restart the nginx container
    #[arg(long)]
    pub nginx: bool,

    /// Restart the php container
    #[arg(long)]
    pub php: bool,

    /// Restart the database container
    #[arg(long, visible_alias = "mysql")]
    pub db: bool,

    /// Restart every service; without a site name, every site
    #[arg(long)]
    pub all: bool,

    /// Answer yes to the bulk confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

/// Restart the selected site stacks.
pub fn cmd_restart(args: &RestartArgs, quiet: bool) -> Result<()> {
    let request = StackRequest {
        site: args.site.clone(),
        all: args.all,
        components: component_set_from_flags(args.nginx, args.php, args.db),
    };
    run_stack(request, StackAction::Restart, args.yes, quiet)
}
