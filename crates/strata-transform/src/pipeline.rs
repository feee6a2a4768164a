//! The transformation run: promote services to use cases, lift repositories
//! and controllers, then copy the flat layers into clean-architecture folders.

use std::path::{Path, PathBuf};

use serde::Serialize;
use strata_codegen::naming::{base_package, join_package};
use strata_codegen::{ArtifactTemplate, Bindings, GenerateOutcome, generate, use_case_names};
use strata_config::Toggles;
use strata_parser::{DeclarationKind, DeclarationNode, ParserError, SourceUnit, SpanCursor};
use strata_parser::{index_with_extension, metadata, to_signature};

use crate::descriptor::ProjectDescriptor;
use crate::error::TransformError;
use crate::fs_ops::{
    copy_file_if_absent, copy_layer_dirs, locate_layer_source, rename_to_canonical,
    restandardize_suffix,
};
use crate::layout::{self, LayerMapping};
use crate::walk::files_with_extension;

/// What a run did, for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransformReport {
    /// Generated or copied files.
    pub created: Vec<PathBuf>,
    /// Destinations that already existed.
    pub skipped: Vec<PathBuf>,
    /// Layer directories copied or renamed into place.
    pub layers: Vec<PathBuf>,
    pub renamed_files: usize,
    /// Files that failed to parse.
    pub unparsable: Vec<PathBuf>,
    /// `Type.method` entries whose span could not be recovered.
    pub ambiguous: Vec<String>,
}

impl TransformReport {
    fn record(&mut self, outcome: GenerateOutcome, destination: PathBuf) {
        match outcome {
            GenerateOutcome::Created => self.created.push(destination),
            GenerateOutcome::Skipped => self.skipped.push(destination),
        }
    }
}

/// Runs the enabled transformations over one project.
#[derive(Debug, Clone)]
pub struct Transformer {
    source_root: PathBuf,
    lombok: bool,
    toggles: Toggles,
    extension: String,
}

impl Transformer {
    #[must_use]
    pub fn new(descriptor: &ProjectDescriptor, toggles: Toggles) -> Self {
        Self {
            source_root: descriptor.source_root(),
            lombok: descriptor.uses_lombok(),
            toggles,
            extension: strata_parser::parser::JAVA_EXTENSION.to_string(),
        }
    }

    /// Scan files with `extension` instead of `java`.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    #[must_use]
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Run every enabled transformation in order: contracts, implementations,
    /// controllers, repositories, infrastructure, domain, data.
    ///
    /// # Errors
    /// `MissingSourceRoot` when the source root does not exist; `Io`,
    /// `Codegen` or a non-syntax `Parser` error on the first fatal failure.
    pub fn run(&self) -> Result<TransformReport, TransformError> {
        if !self.source_root.is_dir() {
            return Err(TransformError::MissingSourceRoot(self.source_root.clone()));
        }
        let mut report = TransformReport::default();

        if self.toggles.use_cases {
            self.promote_use_cases(ArtifactTemplate::Contract, &mut report)?;
        }
        if self.toggles.implementations {
            self.promote_use_cases(ArtifactTemplate::Implementation, &mut report)?;
        }
        if self.toggles.controllers {
            self.lift(
                layout::CONTROLLER_SOURCES,
                DeclarationKind::Class,
                layout::CONTROLLERS_DIR,
                &mut report,
            )?;
        }
        if self.toggles.repositories {
            self.lift(
                layout::REPOSITORY_SOURCES,
                DeclarationKind::Interface,
                layout::DOMAIN_REPOSITORIES_DIR,
                &mut report,
            )?;
        }
        if self.toggles.infrastructure {
            self.copy_layer(&layout::INFRA, &mut report)?;
        }
        if self.toggles.domain {
            self.copy_layer(&layout::DOMAIN, &mut report)?;
        }
        if self.toggles.data {
            self.copy_layer(&layout::DATA, &mut report)?;
        }

        tracing::info!(
            created = report.created.len(),
            skipped = report.skipped.len(),
            unparsable = report.unparsable.len(),
            "transformation finished"
        );
        Ok(report)
    }

    fn promote_use_cases(
        &self,
        template: ArtifactTemplate,
        report: &mut TransformReport,
    ) -> Result<(), TransformError> {
        let Some(services) = locate_layer_source(&self.source_root, layout::SERVICE_SOURCES) else {
            tracing::info!(root = %self.source_root.display(), "no service directory");
            return Ok(());
        };

        for path in files_with_extension(&services, &self.extension) {
            let Some(unit) = parse_or_skip(&path, &self.extension, report)? else {
                continue;
            };
            let Some(type_name) = unit.primary_type.as_deref() else {
                continue;
            };
            let depth = path
                .parent()
                .and_then(|dir| dir.strip_prefix(&self.source_root).ok())
                .map_or(0, |relative| relative.components().count());
            let base = base_package(unit.package.as_deref(), depth);

            let classes = unit
                .tree
                .declarations_of(DeclarationKind::Class)
                .filter(|class| class.parent.is_none());
            for class in classes {
                self.promote_class(template, &unit, class, type_name, &base, report)?;
            }
        }
        Ok(())
    }

    fn promote_class(
        &self,
        template: ArtifactTemplate,
        unit: &SourceUnit,
        class: &DeclarationNode,
        type_name: &str,
        base: &str,
        report: &mut TransformReport,
    ) -> Result<(), TransformError> {
        let fields = metadata::fields(&unit.tree, class);
        let dependencies = metadata::dependencies(&unit.tree, class);
        let imports = metadata::imports(&unit.tree);

        let mut cursor = SpanCursor::new(unit, class);
        let methods = unit
            .tree
            .members_of(class)
            .filter(|member| member.kind == DeclarationKind::Method);

        for method in methods {
            let span = cursor.extract(method)?;
            if !metadata::is_promotable(method) {
                continue;
            }
            if span.is_ambiguous() {
                tracing::warn!(
                    path = %unit.path.display(),
                    method = %method.name,
                    line = method.position.line,
                    "could not recover method text, skipping"
                );
                report.ambiguous.push(format!("{type_name}.{}", method.name));
                continue;
            }

            let names = use_case_names(type_name, &method.name);
            let contract_package = join_package(&[base, "data.contracts", &names.feature]);
            let (package_name, artifact_name, dir, method_code) = match template {
                ArtifactTemplate::Contract => {
                    let Some(signature) = to_signature(&span) else {
                        tracing::warn!(method = %method.name, "no signature line found, skipping");
                        report.ambiguous.push(format!("{type_name}.{}", method.name));
                        continue;
                    };
                    (
                        contract_package.clone(),
                        names.contract.clone(),
                        layout::CONTRACTS_DIR,
                        signature,
                    )
                }
                ArtifactTemplate::Implementation => (
                    join_package(&[base, "data.usecases", &names.feature]),
                    names.implementation.clone(),
                    layout::USE_CASES_DIR,
                    span.text.clone(),
                ),
            };

            let bindings = Bindings {
                package_name,
                artifact_name,
                contract_name: names.contract.clone(),
                contract_package,
                feature: names.feature.clone(),
                fields: fields.iter().map(strata_parser::FieldFact::declaration).collect(),
                dependencies: dependencies.clone(),
                imports: imports.clone(),
                method_code,
                lombok: self.lombok,
            };

            let destination = self
                .layer_dir(dir)
                .join(&names.feature)
                .join(format!("{}.{}", bindings.artifact_name, self.extension));
            let outcome = generate(template, &bindings, &destination)?;
            report.record(outcome, destination);
        }
        Ok(())
    }

    /// Copy every file declaring a `kind` type from the first existing source
    /// candidate into `target`, named after the declared type.
    fn lift(
        &self,
        sources: &[&str],
        kind: DeclarationKind,
        target: &[&str],
        report: &mut TransformReport,
    ) -> Result<(), TransformError> {
        let Some(source) = locate_layer_source(&self.source_root, sources) else {
            tracing::info!(candidates = ?sources, "no source directory");
            return Ok(());
        };
        let target = self.layer_dir(target);

        for path in files_with_extension(&source, &self.extension) {
            let Some(unit) = parse_or_skip(&path, &self.extension, report)? else {
                continue;
            };
            let Some(declared) = unit.tree.declarations_of(kind).next() else {
                tracing::debug!(path = %path.display(), %kind, "no matching declaration");
                continue;
            };
            let destination = target.join(format!("{}.{}", declared.name, self.extension));
            if copy_file_if_absent(&path, &destination)? {
                tracing::info!(from = %path.display(), to = %destination.display(), "copied");
                report.created.push(destination);
            } else {
                report.skipped.push(destination);
            }
        }
        Ok(())
    }

    fn copy_layer(
        &self,
        mapping: &LayerMapping,
        report: &mut TransformReport,
    ) -> Result<(), TransformError> {
        let layer_root = self.source_root.join(mapping.layer);

        // Aliases already folded into the canonical folder must not be copied again.
        let canonical_done = mapping
            .canonical
            .is_some_and(|rename| layer_root.join(rename.name).exists());
        let subdirs: Vec<&str> = mapping
            .subdirs
            .iter()
            .copied()
            .filter(|subdir| {
                !(canonical_done
                    && mapping
                        .canonical
                        .is_some_and(|rename| rename.aliases.contains(subdir)))
            })
            .collect();

        report
            .layers
            .extend(copy_layer_dirs(&self.source_root, mapping.layer, &subdirs)?);

        if let Some(rename) = mapping.canonical {
            if let Some(renamed) = rename_to_canonical(&layer_root, rename.name, rename.aliases)? {
                report.layers.push(renamed);
            }
            report.renamed_files += restandardize_suffix(
                &layer_root.join(rename.name),
                &self.extension,
                rename.remove_suffix,
                rename.add_suffix,
            )?;
        }
        Ok(())
    }

    fn layer_dir(&self, segments: &[&str]) -> PathBuf {
        segments
            .iter()
            .fold(self.source_root.clone(), |dir, segment| dir.join(segment))
    }
}

/// Parse `path`, recording and skipping files with syntax errors.
fn parse_or_skip(
    path: &Path,
    extension: &str,
    report: &mut TransformReport,
) -> Result<Option<SourceUnit>, TransformError> {
    match index_with_extension(path, extension) {
        Ok(unit) => Ok(Some(unit)),
        Err(err @ (ParserError::ParseFailed { .. } | ParserError::UnsupportedSource(_))) => {
            if !report.unparsable.iter().any(|seen| seen == path) {
                tracing::warn!(path = %path.display(), %err, "skipping file");
                report.unparsable.push(path.to_path_buf());
            }
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}
