//! Registering a generated server in Claude.app's `claude_desktop_config.json`.
//!
//! Only the entry for the generated server is touched. Sibling servers and
//! unrelated top-level keys are carried through unchanged.

use crate::constants::SERVER_COMMAND;
use crate::error::{Error, Result};
use crate::platform::{HostEnvironment, HostProfileResolver};
use crate::prompt::Prompter;
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Contents of the host configuration file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct HostConfig {
    /// Server entries, kept as raw JSON so unknown fields survive a rewrite
    #[serde(rename = "mcpServers", default, skip_serializing_if = "Option::is_none")]
    pub mcp_servers: Option<IndexMap<String, Value>>,

    /// Other settings preserved from the original file
    #[serde(flatten)]
    pub other: IndexMap<String, Value>,
}

/// Launch command for one MCP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerEntry {
    pub command: String,
    pub args: Vec<String>,
}

impl ServerEntry {
    /// Entry running `node <server_path>`.
    pub fn node(server_path: impl Into<String>) -> Self {
        Self { command: SERVER_COMMAND.to_string(), args: vec![server_path.into()] }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Added,
    Replaced,
    /// An entry with the same name exists and the user kept it
    Skipped,
}

impl HostConfig {
    /// Loads the config file, or returns an empty config if it does not exist.
    /// The parent directory is created in the latter case.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                Error::HostConfigParseError { path: path.display().to_string(), e }
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("'{}' does not exist, starting from an empty config", path.display());
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent).map_err(Error::IoError)?;
                }
                Ok(Self::default())
            }
            Err(e) => Err(Error::IoError(e)),
        }
    }

    /// Writes the whole config back, pretty-printed with two-space indentation.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            Error::HostConfigParseError { path: path.display().to_string(), e }
        })?;
        fs::write(path, content).map_err(Error::IoError)
    }

    pub fn contains_server(&self, name: &str) -> bool {
        self.mcp_servers.as_ref().is_some_and(|servers| servers.contains_key(name))
    }

    /// Inserts or overwrites the entry for `name`.
    pub fn set_server(&mut self, name: &str, entry: &ServerEntry) {
        let value = serde_json::json!({ "command": entry.command, "args": entry.args });
        self.mcp_servers.get_or_insert_with(IndexMap::new).insert(name.to_string(), value);
    }
}

/// Adds `entry` under `name` to the config file at `config_path`.
///
/// An existing entry with the same name is only replaced after `prompt`
/// confirms it. When declined, the file is not written at all.
pub fn register_server(
    config_path: &Path,
    name: &str,
    entry: &ServerEntry,
    prompt: &dyn Prompter,
) -> Result<RegistrationOutcome> {
    let mut config = HostConfig::load_or_default(config_path)?;

    let outcome = if config.contains_server(name) {
        let question = format!(
            "An MCP server named '{name}' is already configured for Claude.app. Replace it?"
        );
        let replace = prompt.confirm(question, false)?;
        if !replace {
            debug!("Keeping existing '{}' entry in '{}'", name, config_path.display());
            return Ok(RegistrationOutcome::Skipped);
        }
        RegistrationOutcome::Replaced
    } else {
        RegistrationOutcome::Added
    };

    config.set_server(name, entry);
    config.save(config_path)?;
    debug!("Registered '{}' in '{}'", name, config_path.display());

    Ok(outcome)
}

/// Registers the project in `project_dir` under `name` with Claude.app.
///
/// Returns the config file path along with the outcome.
pub fn install_for_host(
    env: &HostEnvironment,
    resolver: &dyn HostProfileResolver,
    prompt: &dyn Prompter,
    name: &str,
    project_dir: &Path,
) -> Result<(PathBuf, RegistrationOutcome)> {
    let config_path = env.config_path(resolver)?;
    let entry = ServerEntry::node(env.server_path(project_dir)?);
    let outcome = register_server(&config_path, name, &entry, prompt)?;
    Ok((config_path, outcome))
}
