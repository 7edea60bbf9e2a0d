//! Core library for sitestack
//!
//! This crate holds everything the CLI binaries share:
//! - Site registry (persisted site name/path records with ordered enumeration)
//! - Configuration management (config.json schema, paths, load/save)
//! - Stack model (components, actions, and the engine command matrix)
//! - Command executor (synchronous compose subprocess invocation)
//! - Stack orchestrator (target resolution and execution sequencing)

pub mod config;
pub mod exec;
pub mod sites;
pub mod stack;

pub use config::{Config, ConfigError, load_config_or_default, save_config};
pub use exec::{CommandExecutor, CommandOutput, ComposeExecutor, ExecError};
pub use sites::{Site, SiteDirectory, SiteRegistry, SiteStoreError, load_sites, save_sites};
pub use stack::{
    Component, ComponentSet, ConfirmationGate, EngineCommand, NullReporter, RunOutcome,
    StackAction, StackError, StackOrchestrator, StackReporter, StackRequest, engine_command,
};

/// Get the version of this crate
pub fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
