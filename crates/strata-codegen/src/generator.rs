//! Rendering and at-most-once writing of use-case artifacts.

use std::fs::{File, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use askama::Template;

use crate::bindings::Bindings;
use crate::error::CodegenError;

/// The two artifact shapes strata generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactTemplate {
    /// Interface carrying one method signature.
    Contract,
    /// Class implementing the contract with the service method body.
    Implementation,
}

#[derive(Template)]
#[template(path = "use_case.java", escape = "none")]
struct ContractTemplate<'a> {
    b: &'a Bindings,
}

#[derive(Template)]
#[template(path = "use_case_impl.java", escape = "none")]
struct ImplementationTemplate<'a> {
    b: &'a Bindings,
}

/// Result of a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    Created,
    /// Destination already existed and was left untouched.
    Skipped,
}

/// Rendered content bound to its destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTarget {
    pub destination: PathBuf,
    pub content: String,
}

impl GenerationTarget {
    /// Render `template` with `bindings` for `destination`.
    ///
    /// # Errors
    /// `Render` when the template engine fails.
    pub fn render(
        template: ArtifactTemplate,
        bindings: &Bindings,
        destination: impl Into<PathBuf>,
    ) -> Result<Self, CodegenError> {
        let rendered = match template {
            ArtifactTemplate::Contract => ContractTemplate { b: bindings }.render(),
            ArtifactTemplate::Implementation => ImplementationTemplate { b: bindings }.render(),
        };
        let mut content = rendered.map_err(|source| CodegenError::Render {
            artifact: bindings.artifact_name.clone(),
            source,
        })?;
        if !content.ends_with('\n') {
            content.push('\n');
        }
        Ok(Self {
            destination: destination.into(),
            content,
        })
    }

    /// Write the content unless the destination already exists.
    ///
    /// Parent directories are created as needed.
    ///
    /// # Errors
    /// `Write` on any filesystem failure other than an existing destination.
    pub fn write(&self) -> Result<GenerateOutcome, CodegenError> {
        let path = &self.destination;
        let io_err = |source| CodegenError::Write {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let created = write_new(path, |file| file.write_all(self.content.as_bytes()))
            .map_err(io_err)?;
        if !created {
            tracing::debug!(path = %path.display(), "artifact exists, skipping");
            return Ok(GenerateOutcome::Skipped);
        }

        tracing::info!(path = %path.display(), "generated artifact");
        Ok(GenerateOutcome::Created)
    }
}

/// Create `path` and fill it through `fill`. `Ok(false)` when the file
/// already exists; a file `fill` fails on is removed again.
fn write_new(
    path: &Path,
    fill: impl FnOnce(&mut File) -> io::Result<()>,
) -> io::Result<bool> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(e),
    };
    if let Err(e) = fill(&mut file) {
        drop(file);
        if let Err(cleanup) = std::fs::remove_file(path) {
            tracing::warn!(path = %path.display(), error = %cleanup, "could not remove partial artifact");
        }
        return Err(e);
    }
    Ok(true)
}

/// Render and write one artifact. Never overwrites.
///
/// # Errors
/// `Render` or `Write`, see [`GenerationTarget`].
pub fn generate(
    template: ArtifactTemplate,
    bindings: &Bindings,
    destination: &Path,
) -> Result<GenerateOutcome, CodegenError> {
    GenerationTarget::render(template, bindings, destination)?.write()
}
