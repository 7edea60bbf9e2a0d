//! Stack orchestration module
//!
//! This module provides the stack model and orchestration logic:
//! - Typed components and actions for a site's service stack
//! - The closed (component, action) -> engine command matrix
//! - Reporter trait for user-facing progress
//! - The orchestrator that resolves targets and sequences execution

mod command;
mod component;
mod error;
mod orchestrator;
mod report;

pub use command::{EngineCommand, engine_command};
pub use component::{Component, ComponentSet, StackAction};
pub use error::StackError;
pub use orchestrator::{ConfirmationGate, RunOutcome, StackOrchestrator, StackRequest};
pub use report::{NullReporter, StackReporter};
