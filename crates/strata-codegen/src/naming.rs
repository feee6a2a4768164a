//! Use-case naming and package composition.

/// Suffix stripped from a type name to derive its feature folder.
pub const SERVICE_SUFFIX: &str = "Service";

/// Names derived from one promotable method of one service type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseCaseNames {
    /// Lowercase feature folder, e.g. `order` for `OrderService`.
    pub feature: String,
    /// `{Method}{Feature}UseCase`
    pub contract: String,
    /// `{Method}{Feature}UseCaseImpl`
    pub implementation: String,
}

/// Derive use-case names for `method_name` declared in `type_name`.
///
/// `DoThing` in `ExampleService` becomes `DoThingExampleUseCase` in the
/// `example` feature.
#[must_use]
pub fn use_case_names(type_name: &str, method_name: &str) -> UseCaseNames {
    let stem = type_name.strip_suffix(SERVICE_SUFFIX).unwrap_or(type_name);
    let stem = if stem.is_empty() { type_name } else { stem };
    let contract = format!("{}{stem}UseCase", capitalize(method_name));
    UseCaseNames {
        feature: stem.to_lowercase(),
        implementation: format!("{contract}Impl"),
        contract,
    }
}

/// Upper-case the first character, leave the rest alone.
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Root package of a project, given a source file's package and how many
/// directories below the source root the file sits.
///
/// `com.acme.shop.services` at depth 1 yields `com.acme.shop`.
#[must_use]
pub fn base_package(package: Option<&str>, depth: usize) -> String {
    let Some(package) = package else {
        return String::new();
    };
    let segments: Vec<&str> = package.split('.').filter(|s| !s.is_empty()).collect();
    let keep = segments.len().saturating_sub(depth);
    segments[..keep].join(".")
}

/// Join package segments, skipping empty ones.
#[must_use]
pub fn join_package(segments: &[&str]) -> String {
    segments
        .iter()
        .flat_map(|segment| segment.split('.'))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}
