//! CLI command implementations
//!
//! This module contains the implementations for the stack lifecycle
//! commands and the site registry subcommands.

mod reload;
mod restart;
mod site;

pub use reload::{ReloadArgs, cmd_reload};
pub use restart::{RestartArgs, cmd_restart};
pub use site::{SiteArgs, cmd_site};

use anyhow::Result;
use console::style;
use tracing::debug;

use sitestack_core::{
    Component, ComponentSet, ComposeExecutor, RunOutcome, StackAction, StackOrchestrator,
    StackRequest, load_config_or_default, load_sites,
};

use crate::output::{ConsoleReporter, PromptGate};

/// Build the typed component set from the individual CLI flags.
pub(crate) fn component_set_from_flags(nginx: bool, php: bool, db: bool) -> ComponentSet {
    let mut set = ComponentSet::new();
    if nginx {
        set.insert(Component::Nginx);
    }
    if php {
        set.insert(Component::Php);
    }
    if db {
        set.insert(Component::Db);
    }
    set
}

/// Shared pipeline behind `reload` and `restart`: wire the registry,
/// config, executor, gate, and reporter into the orchestrator and run.
pub(crate) fn run_stack(
    request: StackRequest,
    action: StackAction,
    yes: bool,
    quiet: bool,
) -> Result<()> {
    debug!(
        "requested {} (site: {:?}, all: {}, components: {})",
        action,
        request.site,
        request.all,
        request.components.len()
    );

    let registry = load_sites()?;
    let config = load_config_or_default()?;

    let executor = ComposeExecutor::new(config.compose_program.as_str());
    let gate = PromptGate::new(yes);
    let reporter = ConsoleReporter::new(quiet);
    let orchestrator = StackOrchestrator::new(&registry, &gate, &executor, &reporter);

    let outcome = match action {
        StackAction::Reload => orchestrator.reload(&request)?,
        StackAction::Restart => orchestrator.restart(&request)?,
    };

    match outcome {
        RunOutcome::Completed { sites: 0 } => {
            if !quiet {
                println!(
                    "{}",
                    style("No sites registered. Add one with 'sitestack site add <name> <path>'.")
                        .dim()
                );
            }
        }
        RunOutcome::Completed { sites } => {
            if !quiet {
                println!();
                println!(
                    "{} stack {} finished for {} {}",
                    style("Done:").green().bold(),
                    action,
                    sites,
                    if sites == 1 { "site" } else { "sites" }
                );
            }
        }
        RunOutcome::Declined => {
            if !quiet {
                println!("{}", style("Aborted. No containers were touched.").dim());
            }
        }
    }

    Ok(())
}
