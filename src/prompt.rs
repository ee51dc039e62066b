//! User interaction for create-mcp-server.
//! Prompts go through the `Prompter` trait so the flows can be driven by fakes in tests.

use crate::error::{Error, Result};
use dialoguer::{Confirm, Input};

/// Validation rule applied to text answers.
pub type Validator = fn(&str) -> std::result::Result<(), String>;

pub trait Prompter {
    /// Asks for a line of text.
    fn text(&self, prompt: &str, default: Option<&str>, validate: Option<Validator>)
        -> Result<String>;

    /// Asks a yes/no question.
    fn confirm(&self, prompt: String, default: bool) -> Result<bool>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn text(
        &self,
        prompt: &str,
        default: Option<&str>,
        validate: Option<Validator>,
    ) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        if let Some(validate) = validate {
            input = input.validate_with(move |value: &String| validate(value));
        }
        input.interact_text().map_err(Error::from)
    }

    fn confirm(&self, prompt: String, default: bool) -> Result<bool> {
        Confirm::new().with_prompt(prompt).default(default).interact().map_err(Error::from)
    }
}
