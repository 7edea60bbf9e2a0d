//! Stack orchestrator
//!
//! Resolves the target site set and component set from a normalized request,
//! sequences the per-site component loops, and dispatches each action
//! through the command executor. Collaborators are injected at construction;
//! the orchestrator holds no state of its own.

use std::io;
use std::path::PathBuf;
use tracing::debug;

use crate::exec::CommandExecutor;
use crate::sites::{Site, SiteDirectory};

use super::command::engine_command;
use super::component::{Component, ComponentSet, StackAction};
use super::error::StackError;
use super::report::StackReporter;

/// Blocks a bulk run until the operator answers the prompt.
pub trait ConfirmationGate {
    /// Returns `Ok(true)` to proceed, `Ok(false)` to abort cleanly.
    fn confirm(&self, prompt: &str) -> io::Result<bool>;
}

/// Normalized input for one stack run.
#[derive(Debug, Clone, Default)]
pub struct StackRequest {
    /// Positional site name, if one was given.
    pub site: Option<String>,

    /// The `--all` flag. Without a site name it selects every site; with
    /// one it expands the component set instead.
    pub all: bool,

    /// Components selected through individual flags.
    pub components: ComponentSet,
}

/// How a stack run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The run executed its component loops over this many sites.
    Completed { sites: usize },

    /// The operator declined the bulk confirmation; nothing was executed.
    Declined,
}

enum Resolution {
    Run {
        sites: Vec<Site>,
        components: ComponentSet,
    },
    Declined,
}

/// Drives reload/restart runs over the registered sites.
pub struct StackOrchestrator<'a> {
    directory: &'a dyn SiteDirectory,
    gate: &'a dyn ConfirmationGate,
    executor: &'a dyn CommandExecutor,
    reporter: &'a dyn StackReporter,
}

impl<'a> StackOrchestrator<'a> {
    pub fn new(
        directory: &'a dyn SiteDirectory,
        gate: &'a dyn ConfirmationGate,
        executor: &'a dyn CommandExecutor,
        reporter: &'a dyn StackReporter,
    ) -> Self {
        Self {
            directory,
            gate,
            executor,
            reporter,
        }
    }

    /// Reload the selected stacks in place where the component supports it.
    pub fn reload(&self, request: &StackRequest) -> Result<RunOutcome, StackError> {
        self.exec_stacks(request, StackAction::Reload)
    }

    /// Restart the selected stacks with a full stop/start cycle.
    pub fn restart(&self, request: &StackRequest) -> Result<RunOutcome, StackError> {
        self.exec_stacks(request, StackAction::Restart)
    }

    fn exec_stacks(
        &self,
        request: &StackRequest,
        action: StackAction,
    ) -> Result<RunOutcome, StackError> {
        debug!("stack {} start", action);

        let (sites, components) = match self.resolve(request, action)? {
            Resolution::Run { sites, components } => (sites, components),
            Resolution::Declined => return Ok(RunOutcome::Declined),
        };

        for site in &sites {
            self.reporter.site_begin(site);
            let workdir = working_dir(site);
            for component in components.iter() {
                self.exec_stack_from_type(component, action, workdir.as_deref());
            }
            self.reporter.site_end(site);
        }

        debug!("stack {} end", action);
        Ok(RunOutcome::Completed { sites: sites.len() })
    }

    /// Resolve the site set and component set for one run.
    ///
    /// A positional site name takes precedence over the bulk flag. Selector
    /// errors abort the whole run with nothing executed.
    fn resolve(
        &self,
        request: &StackRequest,
        action: StackAction,
    ) -> Result<Resolution, StackError> {
        if let Some(name) = request.site.as_deref() {
            let site = self
                .directory
                .find(name)
                .ok_or_else(|| StackError::UnknownSite(name.to_string()))?;

            let components = if request.all {
                ComponentSet::FULL
            } else {
                request.components
            };
            if components.is_empty() {
                return Err(StackError::NoComponents);
            }

            Ok(Resolution::Run {
                sites: vec![site],
                components,
            })
        } else if request.all {
            let prompt = format!("Are you sure you want to {} all containers?", action);
            if !self.gate.confirm(&prompt).map_err(StackError::Prompt)? {
                debug!("bulk {} declined", action);
                return Ok(Resolution::Declined);
            }

            let sites = self.directory.list_all();
            // A bulk run always touches the full component set; individual
            // flags passed alongside --all are discarded.
            let components = if sites.is_empty() {
                request.components
            } else {
                ComponentSet::FULL
            };

            Ok(Resolution::Run { sites, components })
        } else {
            Err(StackError::NoSelector)
        }
    }

    /// Dispatch one component action. Terminal for this component only:
    /// failures are reported and never propagate into the loop.
    fn exec_stack_from_type(
        &self,
        component: Component,
        action: StackAction,
        workdir: Option<&std::path::Path>,
    ) {
        let Some(command) = engine_command(component, action) else {
            debug!("{} has no {} operation, skipping", component, action);
            return;
        };

        self.reporter.action_begin(component, action);
        debug!("COMMAND: {}", command);

        match self.executor.run(&command, workdir) {
            Ok(output) => self.reporter.action_done(component, action, &output),
            Err(error) => self.reporter.action_failed(component, action, &error),
        }
    }
}

/// Site paths are allowed to be missing: the command then runs from the
/// inherited working directory instead of failing the batch.
fn working_dir(site: &Site) -> Option<PathBuf> {
    if site.path.is_dir() {
        Some(site.path.clone())
    } else {
        debug!(
            "site path {} is not a directory, running from the current directory",
            site.path.display()
        );
        None
    }
}
