//! create-mcp-server scaffolds Model Context Protocol server projects from a template
//! and can register the generated server with Claude.app.

/// Command-line interface module
pub mod cli;

/// Generation configuration collected from options and prompts
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling
pub mod error;

/// Registering servers in `claude_desktop_config.json`
pub mod host_config;

/// Template directory resolution
pub mod loader;

/// Logger setup
pub mod logger;

/// Platform detection and host config location
pub mod platform;

/// Template materialization
/// Walks the template tree and writes the rendered project
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Template rendering
pub mod renderer;
