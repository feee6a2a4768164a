use std::path::Path;

use anyhow::Context;
use strata_config::{GeneralConfig, Toggles};
use strata_transform::{ProjectDescriptor, Transformer};

use crate::cli::GlobalFlags;
use crate::output::output;

/// Run every enabled transformation and print the report.
pub fn handle(
    project_root: &Path,
    toggles: Toggles,
    general: &GeneralConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let descriptor = ProjectDescriptor::read(project_root)
        .context("failed to read the project's build descriptor")?;
    let transformer =
        Transformer::new(&descriptor, toggles).with_extension(general.source_extension.clone());

    tracing::info!(source_root = %transformer.source_root().display(), "transforming project");
    let report = transformer
        .run()
        .with_context(|| format!("transformation of {} failed", project_root.display()))?;

    for path in &report.unparsable {
        tracing::warn!(path = %path.display(), "file skipped: syntax errors");
    }

    if flags.quiet {
        return Ok(());
    }
    output(&report, flags.format)
}
