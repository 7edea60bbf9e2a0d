//! Engine command matrix
//!
//! Maps each (component, action) pair to the compose invocation that
//! performs it. Commands are structured argv data handed to the configured
//! compose program, never shell strings built by concatenation.

use std::fmt;

use super::component::{Component, StackAction};

/// A single compose invocation, as the argv that follows the compose program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineCommand {
    args: &'static [&'static str],
}

impl EngineCommand {
    pub fn args(&self) -> &'static [&'static str] {
        self.args
    }
}

impl fmt::Display for EngineCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.args.join(" "))
    }
}

/// Resolve the compose invocation for one component action.
///
/// Returns `None` when the pair has no defined operation: the database has
/// no reload semantics and is skipped.
pub fn engine_command(component: Component, action: StackAction) -> Option<EngineCommand> {
    let args: &'static [&'static str] = match (action, component) {
        (StackAction::Restart, Component::Nginx) => &["restart", "nginx"],
        (StackAction::Restart, Component::Php) => &["restart", "php"],
        (StackAction::Restart, Component::Db) => &["restart", "db"],
        // nginx validates its configuration before signalling the reload, so
        // a broken config fails the command instead of taking the site down.
        (StackAction::Reload, Component::Nginx) => {
            &["exec", "nginx", "bash", "-c", "nginx -t && nginx -s reload"]
        }
        (StackAction::Reload, Component::Php) => &["exec", "php", "bash", "-c", "kill -USR2 1"],
        (StackAction::Reload, Component::Db) => return None,
    };
    Some(EngineCommand { args })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restart_is_defined_for_every_component() {
        for component in Component::ALL {
            let command = engine_command(component, StackAction::Restart)
                .expect("restart must be defined for every component");
            assert_eq!(command.args(), &["restart", component.service_name()]);
        }
    }

    #[test]
    fn nginx_reload_validates_before_signalling() {
        let command = engine_command(Component::Nginx, StackAction::Reload).unwrap();
        assert_eq!(
            command.args(),
            &["exec", "nginx", "bash", "-c", "nginx -t && nginx -s reload"]
        );
    }

    #[test]
    fn php_reload_signals_the_master_process() {
        let command = engine_command(Component::Php, StackAction::Reload).unwrap();
        assert_eq!(command.args(), &["exec", "php", "bash", "-c", "kill -USR2 1"]);
    }

    #[test]
    fn db_has_no_reload_operation() {
        assert!(engine_command(Component::Db, StackAction::Reload).is_none());
    }

    #[test]
    fn display_joins_argv_for_debug_logging() {
        let command = engine_command(Component::Db, StackAction::Restart).unwrap();
        assert_eq!(command.to_string(), "restart db");
    }
}
