//! Template materialization: walks a template tree and writes the rendered project.
use log::debug;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use crate::{
    constants::{DOTFILE_PREFIX, TEMPLATE_SUFFIX},
    error::{Error, Result},
    renderer::TemplateRenderer,
};

/// Ensures the output directory does not exist yet.
///
/// # Errors
/// * `Error::OutputDirectoryExistsError` if anything already lives at `output_dir`
pub fn get_output_dir<P: AsRef<Path>>(output_dir: P) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    fs::write(path, content).map_err(Error::IoError)
}

/// Converts a template file name into its output name.
///
/// `dotfile-gitignore.ejs` becomes `.gitignore`, `index.ts.ejs` becomes `index.ts`.
pub fn output_file_name(file_name: &str) -> String {
    let name = match file_name.strip_prefix(DOTFILE_PREFIX) {
        Some(rest) => format!(".{rest}"),
        None => file_name.to_string(),
    };
    match name.strip_suffix(TEMPLATE_SUFFIX) {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => name,
    }
}

/// Maps a path relative to the template root to its path relative to the output root.
/// Only the file name is renamed; directory components are kept as-is.
pub fn resolve_target_path<P: AsRef<Path>>(relative_path: P) -> PathBuf {
    let relative_path = relative_path.as_ref();
    match relative_path.file_name().and_then(|n| n.to_str()) {
        Some(file_name) => relative_path.with_file_name(output_file_name(file_name)),
        None => relative_path.to_path_buf(),
    }
}

/// Renders every file of a template tree into a fresh output directory.
pub struct Processor<'a> {
    engine: &'a dyn TemplateRenderer,
    template_root: &'a Path,
    output_root: &'a Path,
    context: &'a serde_json::Value,
}

impl<'a> Processor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        template_root: &'a Path,
        output_root: &'a Path,
        context: &'a serde_json::Value,
    ) -> Self {
        Self {
            engine,
            template_root,
            output_root,
            context,
        }
    }

    /// Renders one template file and returns the written output path.
    pub fn process(&self, template_file: &Path) -> Result<PathBuf> {
        let relative_path = template_file
            .strip_prefix(self.template_root)
            .map_err(|e| Error::TemplateError(e.to_string()))?;

        if relative_path.components().any(|c| !matches!(c, Component::Normal(_))) {
            return Err(Error::TemplateError(format!(
                "invalid template path '{}'",
                relative_path.display()
            )));
        }

        let target_path = self.output_root.join(resolve_target_path(relative_path));
        debug!("Rendering '{}' to '{}'", relative_path.display(), target_path.display());

        let content = fs::read_to_string(template_file).map_err(Error::IoError)?;
        let rendered = self.engine.render(&content, self.context)?;
        write_file(&target_path, &rendered)?;

        Ok(target_path)
    }

    /// Materializes the whole template tree.
    ///
    /// Fails before touching the filesystem when the output directory exists.
    /// Any later failure aborts the run and leaves already written files in place.
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        let output_root = get_output_dir(self.output_root)?;
        fs::create_dir_all(&output_root).map_err(Error::IoError)?;

        let mut written = Vec::new();
        for dir_entry in WalkDir::new(self.template_root).sort_by_file_name() {
            let entry = dir_entry.map_err(|e| Error::TemplateError(e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            written.push(self.process(entry.path())?);
        }

        debug!("Materialized {} files into '{}'", written.len(), output_root.display());
        Ok(written)
    }
}

/// Convenience wrapper around [`Processor::run`].
pub fn materialize(
    engine: &dyn TemplateRenderer,
    template_root: &Path,
    output_root: &Path,
    context: &serde_json::Value,
) -> Result<Vec<PathBuf>> {
    Processor::new(engine, template_root, output_root, context).run()
}
