//! Command-line interface implementation for create-mcp-server.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::config::ConfigOverrides;
use crate::constants::TEMPLATE_ENV;

/// Command-line arguments structure for create-mcp-server.
#[derive(Parser, Debug)]
#[command(author, version, about = "Create a new Model Context Protocol server", long_about = None)]
pub struct Args {
    /// Directory where the generated project will be created
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Name of the server
    #[arg(long)]
    pub name: Option<String>,

    /// Description of the server
    #[arg(long)]
    pub description: Option<String>,

    /// Name of the tool the server provides
    #[arg(long)]
    pub tool: Option<String>,

    /// Template directory to generate from instead of the bundled one
    #[arg(long, value_name = "DIR", env = TEMPLATE_ENV)]
    pub template: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            name: self.name.clone(),
            description: self.description.clone(),
            tool: self.tool.clone(),
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
