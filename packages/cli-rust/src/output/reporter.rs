//! Console reporter for stack runs
//!
//! Renders the per-site brackets, a spinner while each engine command runs,
//! the captured command output, and completion/failure marks.

use console::style;
use sitestack_core::{
    CommandOutput, Component, ExecError, Site, StackAction, StackReporter,
};
use std::cell::RefCell;

use super::spinner::CommandSpinner;

const SEPARATOR: &str = "-----------------------";

pub struct ConsoleReporter {
    quiet: bool,
    spinner: RefCell<Option<CommandSpinner>>,
}

impl ConsoleReporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            spinner: RefCell::new(None),
        }
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.clear();
        }
    }
}

impl StackReporter for ConsoleReporter {
    fn site_begin(&self, site: &Site) {
        if self.quiet {
            return;
        }
        println!();
        println!("Executing for {}", style(&site.name).cyan().bold());
        println!("{}", style(SEPARATOR).dim());
    }

    fn site_end(&self, _site: &Site) {
        if self.quiet {
            return;
        }
        println!("{}", style(SEPARATOR).dim());
    }

    fn action_begin(&self, component: Component, action: StackAction) {
        let spinner = CommandSpinner::new_maybe(
            &format!("{} {}...", action.verb_progressive(), component),
            self.quiet,
        );
        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn action_done(&self, component: Component, action: StackAction, output: &CommandOutput) {
        self.clear_spinner();
        if self.quiet {
            return;
        }
        println!("{} {}", style(action.verb_progressive()).bold(), component);
        print_output(output);
        println!("{}", style("Done.").green());
    }

    fn action_failed(&self, component: Component, action: StackAction, error: &ExecError) {
        self.clear_spinner();
        // Failures surface even in quiet mode; the batch keeps going.
        eprintln!(
            "{} could not {} {}: {error}",
            style("Error:").red().bold(),
            action.verb(),
            component
        );
    }
}

fn print_output(output: &CommandOutput) {
    for line in output.stdout.lines() {
        println!("  {line}");
    }
    for line in output.stderr.lines() {
        println!("  {}", style(line).dim());
    }
}
