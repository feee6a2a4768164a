use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use strata_config::Toggles;
use strata_transform::ProjectDescriptor;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct InfoResponse<'a> {
    project_root: &'a Path,
    source_root: PathBuf,
    lombok: bool,
    toggles: Toggles,
    descriptor: ProjectDescriptor,
}

/// Print what a run would work on. Touches nothing.
pub fn handle(project_root: &Path, toggles: Toggles, flags: &GlobalFlags) -> anyhow::Result<()> {
    let descriptor = ProjectDescriptor::read(project_root)
        .context("failed to read the project's build descriptor")?;

    let response = InfoResponse {
        project_root,
        source_root: descriptor.source_root(),
        lombok: descriptor.uses_lombok(),
        toggles,
        descriptor,
    };
    output(&response, flags.format)
}
