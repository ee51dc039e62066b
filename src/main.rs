//! create-mcp-server entry point.
//! Collects the configuration, materializes the template and optionally
//! registers the new server with Claude.app.

use create_mcp_server::{
    cli::{get_args, Args},
    config::GenerationConfig,
    error::{default_error_handler, Error, Result},
    host_config::{install_for_host, RegistrationOutcome},
    loader::{load_template, TemplateSource},
    logger::init_logger,
    platform::{HostEnvironment, WslShellResolver},
    processor::{get_output_dir, materialize},
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
};

fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// # Flow
/// 1. Fails early if the output directory exists
/// 2. Resolves the template directory
/// 3. Collects the generation config
/// 4. Materializes the template
/// 5. Registers the server with Claude.app if requested; failures here only warn
fn run(args: Args) -> Result<()> {
    let prompt = DialoguerPrompter::new();
    let engine = MiniJinjaRenderer::new()?;
    let host_env = HostEnvironment::detect();

    let output_root = get_output_dir(&args.output_dir)?;
    let template_root = load_template(&TemplateSource::from_option(args.template.clone()))?;

    let config = GenerationConfig::resolve(
        args.overrides(),
        &prompt,
        host_env.platform.has_host_app(),
    )?;

    let written = materialize(&engine, &template_root, &output_root, &config.to_context()?)?;
    println!("Created {} at '{}' ({} files).", config.name, output_root.display(), written.len());

    if config.install_for_host {
        let resolver = WslShellResolver::new();
        match install_for_host(&host_env, &resolver, &prompt, &config.name, &output_root) {
            Ok((path, RegistrationOutcome::Skipped)) => {
                println!("Skipped Claude.app installation, '{}' left unchanged.", path.display())
            }
            Err(Error::UserAbort) => return Err(Error::UserAbort),
            Ok((path, _)) => println!("Installed {} in '{}'.", config.name, path.display()),
            Err(e) => {
                log::warn!("Claude.app installation failed: {}", e);
                println!("Warning: failed to install the server for Claude.app: {}", e);
            }
        }
    }

    println!("\nNext steps:");
    println!("  cd {}", output_root.display());
    println!("  npm install");
    println!("  npm run build");
    Ok(())
}
