//! Maven build descriptor reading.
//!
//! Only the handful of coordinates the transformer needs are read: the
//! project's group and artifact, its direct dependencies and, from those,
//! whether Lombok is available to generated code.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::TransformError;

/// File name of the build descriptor at the project root.
pub const DESCRIPTOR_FILE: &str = "pom.xml";

const LOMBOK_ARTIFACT: &str = "lombok";

fn block(tag: &str) -> Regex {
    Regex::new(&format!(r"(?s)<{tag}>(.*?)</{tag}>")).expect("valid block regex")
}

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid comment regex"));
static LEAF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<([A-Za-z][\w.-]*)>\s*([^<]*?)\s*</[A-Za-z][\w.-]*>").expect("valid leaf regex")
});
static PARENT: LazyLock<Regex> = LazyLock::new(|| block("parent"));
static DEPENDENCIES: LazyLock<Regex> = LazyLock::new(|| block("dependencies"));
static DEPENDENCY: LazyLock<Regex> = LazyLock::new(|| block("dependency"));
static NESTED_SECTIONS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ["dependencyManagement", "build", "profiles", "reporting", "pluginRepositories"]
        .into_iter()
        .map(block)
        .collect()
});

/// A direct `<dependency>` of the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    pub group_id: Option<String>,
    pub artifact_id: String,
    pub version: Option<String>,
    pub scope: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDescriptor {
    pub project_root: PathBuf,
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
    pub dependencies: Vec<Dependency>,
}

impl ProjectDescriptor {
    /// Read `<project_root>/pom.xml`.
    ///
    /// # Errors
    /// `DescriptorRead` when the file cannot be read, `DescriptorInvalid`
    /// when group or artifact cannot be determined.
    pub fn read(project_root: &Path) -> Result<Self, TransformError> {
        let path = project_root.join(DESCRIPTOR_FILE);
        let xml = std::fs::read_to_string(&path).map_err(|source| {
            TransformError::DescriptorRead {
                path: path.clone(),
                source,
            }
        })?;
        Self::parse(project_root, &xml)
    }

    /// Parse descriptor text for the project at `project_root`.
    ///
    /// # Errors
    /// `DescriptorInvalid` when group or artifact cannot be determined.
    pub fn parse(project_root: &Path, xml: &str) -> Result<Self, TransformError> {
        let invalid = |reason: &str| TransformError::DescriptorInvalid {
            path: project_root.join(DESCRIPTOR_FILE),
            reason: reason.to_string(),
        };

        let mut body = COMMENT.replace_all(xml, "").into_owned();
        for section in NESTED_SECTIONS.iter() {
            body = section.replace_all(&body, "").into_owned();
        }

        let parent = PARENT
            .captures(&body)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string());
        let dependency_block = DEPENDENCIES
            .captures(&body)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string());

        let own = DEPENDENCIES
            .replace_all(&PARENT.replace_all(&body, ""), "")
            .into_owned();

        let group_id = leaf(&own, "groupId")
            .or_else(|| parent.as_deref().and_then(|p| leaf(p, "groupId")))
            .ok_or_else(|| invalid("missing groupId"))?;
        let artifact_id = leaf(&own, "artifactId").ok_or_else(|| invalid("missing artifactId"))?;

        let dependencies = dependency_block
            .as_deref()
            .map(|deps| {
                DEPENDENCY
                    .captures_iter(deps)
                    .filter_map(|c| {
                        let entry = c.get(1)?.as_str();
                        Some(Dependency {
                            group_id: leaf(entry, "groupId"),
                            artifact_id: leaf(entry, "artifactId")?,
                            version: leaf(entry, "version"),
                            scope: leaf(entry, "scope"),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            project_root: project_root.to_path_buf(),
            group_id,
            artifact_id,
            version: leaf(&own, "version")
                .or_else(|| parent.as_deref().and_then(|p| leaf(p, "version"))),
            dependencies,
        })
    }

    /// `<project>/src/main/java/<group as path>/<artifact>`.
    #[must_use]
    pub fn source_root(&self) -> PathBuf {
        let mut root = self.project_root.join("src").join("main").join("java");
        for segment in self.group_id.split('.').filter(|s| !s.is_empty()) {
            root.push(segment);
        }
        root.join(&self.artifact_id)
    }

    /// Whether Lombok is a direct dependency.
    #[must_use]
    pub fn uses_lombok(&self) -> bool {
        self.dependencies
            .iter()
            .any(|dep| dep.artifact_id == LOMBOK_ARTIFACT)
    }
}

fn leaf(xml: &str, tag: &str) -> Option<String> {
    LEAF.captures_iter(xml)
        .find(|c| &c[1] == tag)
        .map(|c| c[2].to_string())
        .filter(|value| !value.is_empty())
}
