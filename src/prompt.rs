//! Interactive input, modeled as a capability handlers receive.
//!
//! Commands never read the terminal directly: anything that would prompt
//! goes through [`InputSource`], so scripted arguments, the interactive
//! menu, and tests all drive the same handler code.

use dialoguer::Input;

use crate::api::ClientError;

pub trait InputSource {
    /// Prompt for a visible line of input. Leading/trailing whitespace is
    /// trimmed; an empty line is a valid answer.
    fn read_line(&self, prompt: &str) -> Result<String, ClientError>;

    /// Prompt for a secret. Never echoed, never trimmed.
    fn read_secret(&self, prompt: &str) -> Result<String, ClientError>;
}

/// Prompts on the controlling terminal.
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn read_line(&self, prompt: &str) -> Result<String, ClientError> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map(|line| line.trim().to_string())
            .map_err(|err| ClientError::Input(err.to_string()))
    }

    fn read_secret(&self, prompt: &str) -> Result<String, ClientError> {
        rpassword::prompt_password(format!("{prompt}: "))
            .map_err(|err| ClientError::Input(err.to_string()))
    }
}
