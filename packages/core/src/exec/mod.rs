//! Engine command execution
//!
//! Synchronous subprocess invocation of the configured compose program.
//! Output is captured, not streamed; callers decide what to surface.

use std::io;
use std::path::Path;
use std::process::Command;
use thiserror::Error;

use crate::stack::EngineCommand;

/// Captured output of one engine command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty() && self.stderr.is_empty()
    }
}

/// Errors raised when an engine command cannot be run at all.
///
/// A command that runs and exits non-zero is not an error here: its output
/// is captured and returned like any other.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Runs engine commands against a site's working context.
pub trait CommandExecutor {
    /// Run one command synchronously, scoped to `workdir` when given, and
    /// capture its output.
    fn run(
        &self,
        command: &EngineCommand,
        workdir: Option<&Path>,
    ) -> Result<CommandOutput, ExecError>;
}

/// Executor that shells out to the configured compose program.
pub struct ComposeExecutor {
    program: String,
}

impl ComposeExecutor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Split the configured program into binary and leading arguments, so
    /// multi-word values such as `docker compose` work unchanged.
    fn program_argv(&self) -> (String, Vec<String>) {
        let mut parts = self.program.split_whitespace().map(str::to_string);
        let binary = parts
            .next()
            .unwrap_or_else(|| "docker-compose".to_string());
        (binary, parts.collect())
    }
}

impl CommandExecutor for ComposeExecutor {
    fn run(
        &self,
        command: &EngineCommand,
        workdir: Option<&Path>,
    ) -> Result<CommandOutput, ExecError> {
        let (binary, leading_args) = self.program_argv();

        let mut child = Command::new(&binary);
        child.args(&leading_args).args(command.args());
        if let Some(dir) = workdir {
            child.current_dir(dir);
        }

        let output = child.output().map_err(|source| ExecError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::{Component, StackAction, engine_command};

    #[test]
    fn single_word_program_has_no_leading_args() {
        let executor = ComposeExecutor::new("docker-compose");
        let (binary, leading) = executor.program_argv();
        assert_eq!(binary, "docker-compose");
        assert!(leading.is_empty());
    }

    #[test]
    fn multi_word_program_splits_into_binary_and_leading_args() {
        let executor = ComposeExecutor::new("docker compose");
        let (binary, leading) = executor.program_argv();
        assert_eq!(binary, "docker");
        assert_eq!(leading, vec!["compose".to_string()]);
    }

    #[test]
    fn captures_stdout_of_the_child() {
        // `echo` stands in for the compose binary; the argv passes through.
        let executor = ComposeExecutor::new("echo");
        let command = engine_command(Component::Nginx, StackAction::Restart).unwrap();

        let output = executor.run(&command, None).unwrap();
        assert_eq!(output.stdout, "restart nginx\n");
        assert!(output.stderr.is_empty());
    }

    #[test]
    fn missing_binary_is_a_spawn_error() {
        let executor = ComposeExecutor::new("sitestack-test-no-such-binary");
        let command = engine_command(Component::Nginx, StackAction::Restart).unwrap();

        let error = executor.run(&command, None).unwrap_err();
        assert!(matches!(error, ExecError::Spawn { .. }));
        assert!(error.to_string().contains("sitestack-test-no-such-binary"));
    }
}
