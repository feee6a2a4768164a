use std::path::Path;

use figment::Jail;
use strata_config::StrataConfig;

#[test]
fn env_disables_a_toggle() {
    Jail::expect_with(|jail| {
        jail.set_env("STRATA_TOGGLES__DOMAIN", "false");

        let config = StrataConfig::load(Path::new(".")).expect("config loads");
        assert!(!config.toggles.domain);
        assert!(config.toggles.data);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file("strata.toml", "[general]\nlog_level = \"info\"\n")?;
        jail.set_env("STRATA_GENERAL__LOG_LEVEL", "trace");

        let config = StrataConfig::load(Path::new(".")).expect("config loads");
        assert_eq!(config.general.log_level, "trace");
        Ok(())
    });
}

#[test]
fn dotenv_file_in_project_root_is_loaded() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "STRATA_TOGGLES__CONTROLLERS=false\n")?;

        let config = StrataConfig::load_with_dotenv(Path::new(".")).expect("config loads");
        assert!(!config.toggles.controllers);
        Ok(())
    });
}
