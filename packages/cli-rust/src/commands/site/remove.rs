//! sitestack site remove - Remove a registered site

use anyhow::{Result, bail};
use clap::Args;
use console::style;
use sitestack_core::{load_sites, save_sites};

/// Arguments for site remove command
#[derive(Args)]
pub struct SiteRemoveArgs {
    /// Name of the site to remove
    pub name: String,
}

pub fn cmd_site_remove(args: &SiteRemoveArgs, quiet: bool) -> Result<()> {
    let mut registry = load_sites()?;

    let Some(site) = registry.remove(&args.name) else {
        bail!("Site '{}' is not registered.", args.name);
    };
    save_sites(&registry)?;

    if !quiet {
        println!(
            "{} Removed site '{}' ({})",
            style("Success:").green().bold(),
            style(&site.name).cyan(),
            site.path.display()
        );
    }

    Ok(())
}
