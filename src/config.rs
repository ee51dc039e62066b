//! Generation configuration: the values substituted into the template.
//! Explicit command-line options win over interactively collected answers.

use crate::constants::{DEFAULT_DESCRIPTION, DEFAULT_TOOL, MIN_NAME_LEN};
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use log::debug;
use serde::Serialize;

/// Values known before any prompt is shown.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tool: Option<String>,
}

/// Immutable configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub name: String,
    pub description: String,
    pub tool: String,
    pub install_for_host: bool,
}

pub fn validate_name(name: &str) -> std::result::Result<(), String> {
    if name.chars().count() < MIN_NAME_LEN {
        return Err(format!("Name must be at least {MIN_NAME_LEN} characters"));
    }
    Ok(())
}

impl GenerationConfig {
    /// Builds the configuration, prompting only for values not given explicitly.
    ///
    /// # Arguments
    /// * `overrides` - Values from command-line options
    /// * `prompt` - Prompter used for missing values
    /// * `host_available` - Whether Claude.app can exist on this platform; the
    ///   install question is only asked when it can
    pub fn resolve(
        overrides: ConfigOverrides,
        prompt: &dyn Prompter,
        host_available: bool,
    ) -> Result<Self> {
        let name = match overrides.name {
            Some(name) => {
                validate_name(&name).map_err(Error::ValidationError)?;
                name
            }
            None => {
                prompt.text("What is the name of your MCP server?", None, Some(validate_name))?
            }
        };

        let description = match overrides.description {
            Some(description) => description,
            None => prompt.text(
                "What is the description of your server?",
                Some(DEFAULT_DESCRIPTION),
                None,
            )?,
        };

        let tool = match overrides.tool {
            Some(tool) => tool,
            None => prompt.text(
                "What is the name of the tool it provides?",
                Some(DEFAULT_TOOL),
                None,
            )?,
        };

        let install_question = "Would you like to install this server for Claude.app?";
        let install_for_host =
            host_available && prompt.confirm(install_question.to_string(), true)?;

        let config = Self {
            name,
            description,
            tool: tool.trim().to_string(),
            install_for_host,
        };
        debug!("Resolved generation config: {:?}", config);
        Ok(config)
    }

    /// Template context with `name`, `description`, `tool` and `installForHost`.
    pub fn to_context(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| Error::TemplateError(e.to_string()))
    }
}
