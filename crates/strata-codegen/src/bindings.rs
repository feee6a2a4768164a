//! Values substituted into the use-case templates.

use std::fmt::Write as _;

use strata_parser::FieldFact;

/// Everything a template needs to render one artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    /// Package of the artifact being generated.
    pub package_name: String,
    pub artifact_name: String,
    pub contract_name: String,
    /// Package of the contract, imported by the implementation.
    pub contract_package: String,
    pub feature: String,
    /// Rendered field declarations, e.g. `private final OrderRepository repo;`.
    pub fields: Vec<String>,
    pub dependencies: Vec<FieldFact>,
    pub imports: Vec<String>,
    /// Method text: a signature for contracts, the full body for implementations.
    pub method_code: String,
    pub lombok: bool,
}

impl Bindings {
    /// Explicit constructor assigning every dependency.
    #[must_use]
    pub fn constructor(&self) -> String {
        let params = self
            .dependencies
            .iter()
            .map(|dep| format!("{} {}", dep.type_name, dep.name))
            .collect::<Vec<_>>()
            .join(", ");
        let mut out = format!("    public {}({params}) {{\n", self.artifact_name);
        for dep in &self.dependencies {
            let _ = writeln!(out, "        this.{0} = {0};", dep.name);
        }
        out.push_str("    }");
        out
    }

    /// Method text prefixed with `@Override` unless its own annotations
    /// already include one.
    #[must_use]
    pub fn method_block(&self) -> String {
        let already_overrides = self
            .method_code
            .lines()
            .map(str::trim_start)
            .take_while(|line| line.starts_with('@') || line.is_empty())
            .any(|line| line.starts_with("@Override"));
        if already_overrides {
            self.method_code.clone()
        } else {
            format!("    @Override\n{}", self.method_code)
        }
    }
}
