//! User interaction handling for sprout.
//! The confirmation gate sits between plan computation and
//! materialization; the prompt itself is behind a trait so the
//! pipeline is testable without a real terminal.

use crate::error::{Error, Result};
use crate::plan::Plan;
use dialoguer::Confirm;

/// Boundary trait for interactive yes/no confirmation.
pub trait Prompter {
    /// Asks a yes/no question; anything but an affirmative answer
    /// returns false.
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Dialoguer-backed prompter used by the CLI.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// The confirmation gate.
///
/// # Arguments
/// * `prompter` - Injected confirmation boundary
/// * `plan` - The computed plan
/// * `assume_yes` - Skip the prompt and confirm (from `--yes`)
///
/// # Returns
/// * `Result<bool>` - Whether materialization may proceed
///
/// # Notes
/// - An empty materialization set never prompts and returns false
/// - Must run strictly after plan computation and strictly before any
///   directory or file creation
pub fn confirm_plan(prompter: &dyn Prompter, plan: &Plan, assume_yes: bool) -> Result<bool> {
    let count = plan.write_count();
    if count == 0 {
        println!("Nothing to generate.");
        return Ok(false);
    }

    if assume_yes {
        return Ok(true);
    }

    let suffix = if count == 1 { "file" } else { "files" };
    prompter.confirm(&format!("Generate {} {}?", count, suffix))
}
