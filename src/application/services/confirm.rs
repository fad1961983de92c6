//! Overwrite confirmation for existing project directories

use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::is_affirmative;
use crate::infrastructure::traits::Prompter;

/// Answer assumed when the operator just presses enter.
pub const DEFAULT_ANSWER: &str = "no";

/// Asks the operator before reusing an existing directory.
pub struct ConfirmationGate {
    prompter: Arc<dyn Prompter>,
}

impl ConfirmationGate {
    pub fn new(prompter: Arc<dyn Prompter>) -> Self {
        Self { prompter }
    }

    /// Ask whether to continue in the existing directory `name`.
    ///
    /// Re-prompting on malformed answers is the prompter's job; this
    /// only looks at the first character of what it returns.
    pub fn confirm_existing(&self, name: &str) -> ApplicationResult<bool> {
        let message = format!("Directory {name} already exist. Continue?");
        let answer = self
            .prompter
            .ask_yes_no(&message, DEFAULT_ANSWER)
            .map_err(|e| ApplicationError::OperationFailed {
                context: format!("read answer for: {message}"),
                source: Box::new(e),
            })?;
        debug!("confirm_existing: answer={:?}", answer);
        Ok(is_affirmative(&answer))
    }
}
