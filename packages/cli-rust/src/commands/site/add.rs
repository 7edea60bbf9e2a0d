//! sitestack site add - Register a new site

use anyhow::{Result, bail};
use clap::Args;
use console::style;
use sitestack_core::{Site, load_sites, save_sites};
use std::path::PathBuf;

/// Arguments for site add command
#[derive(Args)]
pub struct SiteAddArgs {
    /// Name to identify this site (e.g. "example.com")
    pub name: String,

    /// Directory holding the site's compose file
    pub path: PathBuf,

    /// Overwrite if the site already exists
    #[arg(long)]
    pub force: bool,
}

pub fn cmd_site_add(args: &SiteAddArgs, quiet: bool) -> Result<()> {
    let mut registry = load_sites()?;

    if registry.has_site(&args.name) && !args.force {
        bail!(
            "Site '{}' already exists. Use --force to overwrite, or choose a different name.",
            args.name
        );
    }

    // A missing directory is allowed: stack commands tolerate it and run
    // from the current directory until it appears.
    if !args.path.is_dir() && !quiet {
        eprintln!(
            "{} {} is not a directory yet; stack commands will run from the current directory until it exists.",
            style("Warning:").yellow().bold(),
            style(args.path.display()).yellow()
        );
    }

    registry.insert(Site::new(args.name.clone(), args.path.clone()));
    save_sites(&registry)?;

    if !quiet {
        println!(
            "{} Registered site '{}' at {}",
            style("Success:").green().bold(),
            style(&args.name).cyan(),
            args.path.display()
        );
    }

    Ok(())
}
