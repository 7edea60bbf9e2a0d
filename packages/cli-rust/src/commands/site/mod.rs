//! Site registry subcommand implementations
//!
//! Provides `sitestack site` subcommands for managing the registered sites.

mod add;
mod list;
mod remove;

use anyhow::Result;
use clap::{Args, Subcommand};

pub use add::cmd_site_add;
pub use list::cmd_site_list;
pub use remove::cmd_site_remove;

/// Site management command arguments
#[derive(Args)]
pub struct SiteArgs {
    #[command(subcommand)]
    pub command: SiteCommands,
}

/// Site management subcommands
#[derive(Subcommand)]
pub enum SiteCommands {
    /// Register a new site
    Add(add::SiteAddArgs),
    /// Remove a registered site
    Remove(remove::SiteRemoveArgs),
    /// List all registered sites
    List(list::SiteListArgs),
}

/// Handle site command
///
/// Routes to the appropriate handler based on the subcommand.
pub fn cmd_site(args: &SiteArgs, quiet: bool) -> Result<()> {
    match &args.command {
        SiteCommands::Add(add_args) => cmd_site_add(add_args, quiet),
        SiteCommands::Remove(remove_args) => cmd_site_remove(remove_args, quiet),
        SiteCommands::List(list_args) => cmd_site_list(list_args, quiet),
    }
}
