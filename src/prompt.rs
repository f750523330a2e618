//! Interactive input: URL disambiguation for `nimbus unmap`.
//!
//! The prompt is an injected collaborator so the core route-mapping logic
//! stays non-interactive and tests can script the choice.

use crate::error::ApiError;
use dialoguer::Select;

/// Asks the user to pick one of several mapped URLs.
pub trait UrlPrompter: Send + Sync {
    fn choose(&self, prompt: &str, choices: &[String]) -> Result<String, ApiError>;
}

/// Terminal prompter backed by dialoguer.
pub struct DialoguerPrompter;

impl UrlPrompter for DialoguerPrompter {
    fn choose(&self, prompt: &str, choices: &[String]) -> Result<String, ApiError> {
        let selection = Select::new()
            .with_prompt(prompt)
            .items(choices)
            .default(0)
            .interact()
            .map_err(|e| ApiError::InputError(format!("Failed to get user input: {}", e)))?;
        Ok(choices[selection].clone())
    }
}
