//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use std::path::Path;

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use strata_config::{ConfigError, StrataConfig, Toggles};

#[test]
fn loads_toggles_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[toggles]
domain = false
controllers = false
",
        )?;

        let config: StrataConfig = Figment::from(Serialized::defaults(StrataConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(
            config.toggles,
            Toggles {
                domain: false,
                controllers: false,
                ..Toggles::default()
            }
        );
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_from_project_root() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "strata.toml",
            r#"
[general]
log_level = "debug"

[toggles]
data = false
"#,
        )?;

        let config = StrataConfig::load(Path::new(".")).expect("config loads");
        assert_eq!(config.general.log_level, "debug");
        assert!(!config.toggles.data);
        assert!(config.toggles.domain);
        Ok(())
    });
}

#[test]
fn partial_general_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("strata.toml", "[general]\nlog_level = \"info\"\n")?;

        let config = StrataConfig::load(Path::new(".")).expect("config loads");
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.general.source_extension, "java");
        Ok(())
    });
}

#[test]
fn invalid_log_level_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file("strata.toml", "[general]\nlog_level = \"shouting\"\n")?;

        let err = StrataConfig::load(Path::new(".")).expect_err("should reject");
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("strata.toml", "[toggles\ndomain = ")?;

        let err = StrataConfig::load(Path::new(".")).expect_err("should fail");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
