//! Common constants used throughout create-mcp-server.

/// Suffix marking a template file; stripped from the output name.
pub const TEMPLATE_SUFFIX: &str = ".ejs";

/// File name prefix replaced by a leading dot in the output name.
pub const DOTFILE_PREFIX: &str = "dotfile-";

/// Name of the template bundled in the `templates/` directory.
pub const DEFAULT_TEMPLATE: &str = "typescript";

/// Environment variable overriding the template directory.
pub const TEMPLATE_ENV: &str = "CREATE_MCP_SERVER_TEMPLATE";

/// Claude.app configuration file name.
pub const HOST_CONFIG_FILE: &str = "claude_desktop_config.json";

/// Command and build artifact registered for the generated server.
pub const SERVER_COMMAND: &str = "node";
pub const SERVER_ENTRYPOINT: [&str; 2] = ["build", "index.js"];

pub const MIN_NAME_LEN: usize = 4;
pub const DEFAULT_DESCRIPTION: &str = "A Model Context Protocol server";
pub const DEFAULT_TOOL: &str = "echo";
