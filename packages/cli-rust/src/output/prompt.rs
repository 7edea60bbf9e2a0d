//! Interactive confirmation gate

use dialoguer::Confirm;
use sitestack_core::ConfirmationGate;
use std::io;

/// Confirmation gate backed by an interactive terminal prompt.
///
/// The `--yes` flag short-circuits to confirmed without prompting, for
/// non-interactive use.
pub struct PromptGate {
    assume_yes: bool,
}

impl PromptGate {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl ConfirmationGate for PromptGate {
    fn confirm(&self, prompt: &str) -> io::Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }

        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(io::Error::other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assume_yes_confirms_without_prompting() {
        let gate = PromptGate::new(true);
        assert!(gate.confirm("Are you sure?").unwrap());
    }
}
