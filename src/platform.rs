//! Locating Claude.app's configuration file.
//!
//! The location depends on the platform and is described by a lookup table
//! (`config_location`). Under WSL the Windows profile directory has to be
//! discovered through the Windows shell, which sits behind `HostProfileResolver`
//! so it can be replaced in tests.

use crate::constants::{HOST_CONFIG_FILE, SERVER_ENTRYPOINT};
use crate::error::{Error, Result};
use log::debug;
use std::path::{Component, Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    /// Linux running inside the Windows Subsystem for Linux
    Wsl,
    Linux,
    Other,
}

impl Platform {
    /// Detects the platform the process runs on.
    pub fn detect() -> Self {
        match std::env::consts::OS {
            "macos" => Platform::MacOs,
            "windows" => Platform::Windows,
            "linux" if is_wsl() => Platform::Wsl,
            "linux" => Platform::Linux,
            _ => Platform::Other,
        }
    }

    /// Whether Claude.app can run on (or, for WSL, next to) this platform.
    pub fn has_host_app(&self) -> bool {
        config_location(*self).is_some()
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
            Platform::Wsl => "wsl",
            Platform::Linux => "linux",
            Platform::Other => std::env::consts::OS,
        };
        write!(f, "{name}")
    }
}

fn is_wsl() -> bool {
    if std::env::var_os("WSL_DISTRO_NAME").is_some() {
        return true;
    }
    std::fs::read_to_string("/proc/sys/kernel/osrelease")
        .map(|release| release.to_lowercase().contains("microsoft"))
        .unwrap_or(false)
}

/// Directory a config location is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileBase {
    /// The user's home directory
    Home,
    /// `%APPDATA%`
    AppData,
    /// Windows `%APPDATA%` seen from inside WSL
    HostAppData,
}

/// Platform to config directory table. `None` means Claude.app is unavailable.
pub fn config_location(platform: Platform) -> Option<(ProfileBase, &'static [&'static str])> {
    match platform {
        Platform::MacOs => {
            Some((ProfileBase::Home, &["Library", "Application Support", "Claude"]))
        }
        Platform::Windows => Some((ProfileBase::AppData, &["Claude"])),
        Platform::Wsl => Some((ProfileBase::HostAppData, &["Claude"])),
        Platform::Linux | Platform::Other => None,
    }
}

/// Finds the Windows profile directory from inside WSL.
pub trait HostProfileResolver {
    fn resolve_host_profile_dir(&self) -> Result<PathBuf>;
}

/// Asks `cmd.exe` for `%APPDATA%` and converts it with `wslpath`.
#[derive(Default)]
pub struct WslShellResolver;

impl WslShellResolver {
    pub fn new() -> Self {
        Self
    }
}

/// Runs a command and returns its trimmed stdout. Output on stderr counts as failure.
fn run_command(program: &str, args: &[&str]) -> Result<String> {
    let command = format!("{} {}", program, args.join(" "));
    let output = Command::new(program).args(args).output().map_err(|e| {
        Error::ShellCommandError { command: command.clone(), stderr: e.to_string() }
    })?;

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if !stderr.is_empty() {
        return Err(Error::ShellCommandError { command, stderr });
    }
    if !output.status.success() {
        return Err(Error::ShellCommandError {
            command,
            stderr: format!("exited with {}", output.status),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    debug!("'{}' returned '{}'", command, stdout);
    Ok(stdout)
}

impl HostProfileResolver for WslShellResolver {
    fn resolve_host_profile_dir(&self) -> Result<PathBuf> {
        let app_data = run_command("cmd.exe", &["/c", "echo %APPDATA%"])?;
        let wsl_path = run_command("wslpath", &["-u", &app_data])?;
        Ok(PathBuf::from(wsl_path))
    }
}

/// Resolves `project_dir` to a normalized absolute path.
///
/// Existing directories are canonicalized, except on Windows where canonical
/// paths carry a `\\?\` prefix. Otherwise `.` and `..` are resolved lexically
/// on top of the current directory.
fn absolute_project_dir(project_dir: &Path) -> Result<PathBuf> {
    if !cfg!(windows) {
        if let Ok(path) = std::fs::canonicalize(project_dir) {
            return Ok(path);
        }
    }

    let mut resolved = if project_dir.is_absolute() {
        PathBuf::new()
    } else {
        std::env::current_dir().map_err(Error::IoError)?
    };
    for component in project_dir.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    Ok(resolved)
}

/// Everything the registration step needs to know about the environment.
#[derive(Debug, Clone)]
pub struct HostEnvironment {
    pub platform: Platform,
    pub home_dir: Option<PathBuf>,
    pub app_data: Option<PathBuf>,
    pub wsl_distro: Option<String>,
}

impl HostEnvironment {
    pub fn detect() -> Self {
        Self {
            platform: Platform::detect(),
            home_dir: dirs::home_dir(),
            app_data: std::env::var_os("APPDATA").map(PathBuf::from),
            wsl_distro: std::env::var("WSL_DISTRO_NAME").ok(),
        }
    }

    /// Path of `claude_desktop_config.json` for this environment.
    ///
    /// # Errors
    /// * `Error::UnsupportedPlatformError` when Claude.app is unavailable
    /// * `Error::MissingEnvVarError` when `APPDATA` is unset on Windows
    /// * Whatever the resolver returns under WSL
    pub fn config_path(&self, resolver: &dyn HostProfileResolver) -> Result<PathBuf> {
        let (base, relative) = config_location(self.platform).ok_or_else(|| {
            Error::UnsupportedPlatformError { os: self.platform.to_string() }
        })?;

        let mut path = match base {
            ProfileBase::Home => self.home_dir.clone().ok_or(Error::HomeDirectoryError)?,
            ProfileBase::AppData => self
                .app_data
                .clone()
                .ok_or_else(|| Error::MissingEnvVarError { name: "APPDATA".to_string() })?,
            ProfileBase::HostAppData => resolver.resolve_host_profile_dir()?,
        };
        path.extend(relative);
        path.push(HOST_CONFIG_FILE);

        debug!("Host config path: {}", path.display());
        Ok(path)
    }

    /// Path Claude.app should launch for the project in `project_dir`.
    ///
    /// Under WSL the path is turned into a `\\wsl$\<distro>\...` network path
    /// so the Windows host can reach the Linux filesystem.
    pub fn server_path(&self, project_dir: &Path) -> Result<String> {
        let mut entrypoint = absolute_project_dir(project_dir)?;
        entrypoint.extend(SERVER_ENTRYPOINT);
        let entrypoint = entrypoint.display().to_string();

        match self.platform {
            Platform::Wsl => {
                let distro = self.wsl_distro.as_deref().ok_or_else(|| {
                    Error::MissingEnvVarError { name: "WSL_DISTRO_NAME".to_string() }
                })?;
                Ok(format!(r"\\wsl$\{}{}", distro, entrypoint.replace('/', r"\")))
            }
            _ => Ok(entrypoint),
        }
    }
}
