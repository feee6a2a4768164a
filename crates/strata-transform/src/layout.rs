//! Where layers come from and where they go.

/// A layer folder and the flat-layout directories copied into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerMapping {
    pub layer: &'static str,
    pub subdirs: &'static [&'static str],
    pub canonical: Option<CanonicalRename>,
}

/// Rename of copied alias folders to one canonical name, followed by file
/// suffix normalization inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalRename {
    pub name: &'static str,
    /// Tried in order; only the first one present is renamed.
    pub aliases: &'static [&'static str],
    pub remove_suffix: &'static str,
    pub add_suffix: &'static str,
}

pub const DOMAIN: LayerMapping = LayerMapping {
    layer: "domain",
    subdirs: &["enums", "model", "models", "exceptions", "value_objects"],
    canonical: Some(CanonicalRename {
        name: "entities",
        aliases: &["model", "models"],
        remove_suffix: "Model",
        add_suffix: "Entity",
    }),
};

pub const DATA: LayerMapping = LayerMapping {
    layer: "data",
    subdirs: &["form", "dto"],
    canonical: None,
};

pub const INFRA: LayerMapping = LayerMapping {
    layer: "infra",
    subdirs: &["config", "security", "jooq", "persistence"],
    canonical: None,
};

/// Candidate folders holding services to promote into use cases.
pub const SERVICE_SOURCES: &[&str] = &["services", "service"];
/// Candidate folders holding repository interfaces.
pub const REPOSITORY_SOURCES: &[&str] = &["repository", "repositories"];
/// Candidate folders holding controllers.
pub const CONTROLLER_SOURCES: &[&str] = &["controller", "controllers"];

pub const CONTRACTS_DIR: &[&str] = &["data", "contracts"];
pub const USE_CASES_DIR: &[&str] = &["data", "usecases"];
pub const DOMAIN_REPOSITORIES_DIR: &[&str] = &["domain", "repositories"];
pub const CONTROLLERS_DIR: &[&str] = &["presentation", "controllers"];
