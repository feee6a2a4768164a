//! General run settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_source_extension() -> String {
    "java".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Fallback log level when neither `STRATA_LOG` nor a CLI flag sets one.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Extension (without the dot) of the files scanned for promotion.
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            source_extension: default_source_extension(),
        }
    }
}

impl GeneralConfig {
    /// Reject unknown log levels and dotted or empty extensions.
    ///
    /// # Errors
    /// `InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_level".into(),
                reason: format!("expected one of {}", LOG_LEVELS.join(", ")),
            });
        }
        if self.source_extension.is_empty() || self.source_extension.contains('.') {
            return Err(ConfigError::InvalidValue {
                field: "general.source_extension".into(),
                reason: "must be a bare extension such as `java`".into(),
            });
        }
        Ok(())
    }
}
