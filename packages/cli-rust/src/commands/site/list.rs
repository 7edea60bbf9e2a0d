//! sitestack site list - List all registered sites

use anyhow::Result;
use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use console::style;
use sitestack_core::load_sites;

/// Arguments for site list command
#[derive(Args)]
pub struct SiteListArgs {}

pub fn cmd_site_list(_args: &SiteListArgs, quiet: bool) -> Result<()> {
    let registry = load_sites()?;

    if registry.is_empty() {
        if !quiet {
            println!(
                "{}",
                style("No sites registered. Add one with 'sitestack site add <name> <path>'.")
                    .dim()
            );
        }
        return Ok(());
    }

    // Quiet mode emits bare names for scripting.
    if quiet {
        for site in registry.iter() {
            println!("{}", site.name);
        }
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Path"]);
    for site in registry.iter() {
        table.add_row(vec![site.name.clone(), site.path.display().to_string()]);
    }
    println!("{table}");

    Ok(())
}
