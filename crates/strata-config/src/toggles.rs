//! Per-transformation switches.

use serde::{Deserialize, Serialize};

const fn enabled() -> bool {
    true
}

/// Which transformations a run performs. Every switch defaults to on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Toggles {
    #[serde(default = "enabled")]
    pub use_cases: bool,
    #[serde(default = "enabled")]
    pub implementations: bool,
    #[serde(default = "enabled")]
    pub controllers: bool,
    #[serde(default = "enabled")]
    pub repositories: bool,
    #[serde(default = "enabled")]
    pub infrastructure: bool,
    #[serde(default = "enabled")]
    pub domain: bool,
    #[serde(default = "enabled")]
    pub data: bool,
}

impl Default for Toggles {
    fn default() -> Self {
        Self {
            use_cases: true,
            implementations: true,
            controllers: true,
            repositories: true,
            infrastructure: true,
            domain: true,
            data: true,
        }
    }
}

impl Toggles {
    /// Every switch off.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            use_cases: false,
            implementations: false,
            controllers: false,
            repositories: false,
            infrastructure: false,
            domain: false,
            data: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_enabled_by_default() {
        let toggles = Toggles::default();
        assert!(toggles.use_cases);
        assert!(toggles.implementations);
        assert!(toggles.controllers);
        assert!(toggles.repositories);
        assert!(toggles.infrastructure);
        assert!(toggles.domain);
        assert!(toggles.data);
    }

    #[test]
    fn none_can_be_selectively_enabled() {
        let toggles = Toggles {
            data: true,
            ..Toggles::none()
        };
        assert!(toggles.data);
        assert!(!toggles.domain);
        assert!(!toggles.use_cases);
    }
}
