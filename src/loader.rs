//! Template loading for create-mcp-server.
//! Resolves the template root from an explicit path or the template bundled with the crate.
use crate::constants::DEFAULT_TEMPLATE;
use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Represents the source location of a template.
#[derive(Debug, PartialEq, Eq)]
pub enum TemplateSource {
    /// Template directory given on the command line or via the environment
    FileSystem(PathBuf),
    /// Template shipped in the crate's `templates/` directory
    Bundled,
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
            TemplateSource::Bundled => write!(f, "bundled template: '{DEFAULT_TEMPLATE}'"),
        }
    }
}

impl TemplateSource {
    pub fn from_option(template: Option<PathBuf>) -> Self {
        match template {
            Some(path) => Self::FileSystem(path),
            None => Self::Bundled,
        }
    }
}

/// Trait for loading templates from different sources.
pub trait TemplateLoader {
    /// Returns the path of the template root directory.
    fn load(&self) -> Result<PathBuf>;
}

/// Loader for templates from the local filesystem.
pub struct LocalLoader<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    /// # Errors
    /// * `Error::TemplateDoesNotExistsError` if the path is not a directory
    fn load(&self) -> Result<PathBuf> {
        let path = self.path.as_ref();
        if !path.is_dir() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: path.display().to_string(),
            });
        }

        Ok(path.to_path_buf())
    }
}

/// Path of the template bundled with the crate.
pub fn bundled_template_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates").join(DEFAULT_TEMPLATE)
}

/// Returns the template directory for the provided template source.
pub fn load_template(source: &TemplateSource) -> Result<PathBuf> {
    let path = match source {
        TemplateSource::FileSystem(path) => path.clone(),
        TemplateSource::Bundled => bundled_template_dir(),
    };
    debug!("Using template from the {}", source);

    LocalLoader::new(path).load()
}
