//! # Growlab Configuration System
//!
//! Hierarchical configuration for the growlab tools.
//!
//! ## Features
//! - **Layered Sources**: defaults, YAML files, then `GROWLAB_*` environment variables
//! - **Validation**: runtime validation of every loaded value

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

mod error;
mod simulator;
mod telemetry;
mod validation;

pub use error::ConfigError;
pub use simulator::{SimulatorConfig, MAX_APPENDS};
pub use telemetry::TelemetryConfig;

/// Base configuration file, relative to the working directory.
pub const BASE_CONFIG_PATH: &str = "config/growlab.yaml";

/// Top‑level configuration container.
#[derive(Debug, Serialize, Deserialize, Validate, Default, Clone, PartialEq)]
pub struct GrowlabConfig {
    /// Growable array simulation parameters.
    #[serde(default)]
    #[validate(nested)]
    pub simulator: SimulatorConfig,

    /// Logging and metrics configuration.
    #[serde(default)]
    #[validate(nested)]
    pub telemetry: TelemetryConfig,
}

impl GrowlabConfig {
    /// Load configuration from default files and environment.
    ///
    /// Hierarchy:
    /// 1. Default Values
    /// 2. `config/growlab.yaml` - Base settings. If missing, defaults are used.
    /// 3. `config/<GROWLAB_ENV>.yaml` - Environment‑specific overrides.
    /// 4. `GROWLAB_*` environment variables, nested with `__`.
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(GrowlabConfig::default()));

        if Path::new(BASE_CONFIG_PATH).exists() {
            figment = figment.merge(Yaml::file(BASE_CONFIG_PATH));
        } else {
            debug!("{} not found, using default configuration", BASE_CONFIG_PATH);
        }

        if let Ok(env) = std::env::var("GROWLAB_ENV") {
            let env_file = format!("config/{}.yaml", env);
            if Path::new(&env_file).exists() {
                figment = figment.merge(Yaml::file(env_file));
            }
        }

        Self::extract_validated(figment.merge(Self::env_provider()))
    }

    /// Load configuration from a specific path, with environment overrides.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        Self::extract_validated(
            Figment::from(Serialized::defaults(GrowlabConfig::default()))
                .merge(Yaml::file(path))
                .merge(Self::env_provider()),
        )
    }

    fn env_provider() -> Env {
        Env::prefixed("GROWLAB_").ignore(&["ENV"]).split("__")
    }

    fn extract_validated(figment: Figment) -> Result<Self, ConfigError> {
        figment
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn full_config_validation() {
        let config = GrowlabConfig::default();
        config.validate().expect("Default config should validate");
    }

    #[test]
    fn defaults_without_files() {
        Jail::expect_with(|_jail| {
            let config = GrowlabConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config, GrowlabConfig::default());
            Ok(())
        });
    }

    #[test]
    fn yaml_and_environment_layers() {
        Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file(
                "config/growlab.yaml",
                "simulator:\n  appends: 32\ntelemetry:\n  log_level: debug\n",
            )?;
            jail.create_file("config/ci.yaml", "simulator:\n  trace: false\n")?;
            jail.set_env("GROWLAB_ENV", "ci");
            jail.set_env("GROWLAB_SIMULATOR__APPENDS", "64");

            let config = GrowlabConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.simulator.appends, 64);
            assert!(!config.simulator.trace);
            assert_eq!(config.telemetry.log_level, "debug");
            Ok(())
        });
    }

    #[test]
    fn load_from_missing_path() {
        let err = GrowlabConfig::load_from_path("does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_from_path_rejects_invalid_values() {
        Jail::expect_with(|jail| {
            jail.create_file("lab.yaml", "telemetry:\n  log_level: loud\n")?;
            let err = GrowlabConfig::load_from_path("lab.yaml").unwrap_err();
            assert!(matches!(err, ConfigError::Validation(_)));
            assert!(err.to_string().contains("log_level"));
            Ok(())
        });
    }

    #[test]
    fn load_from_path_partial_file_keeps_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file("lab.yaml", "simulator:\n  appends: 10\n")?;
            let config = GrowlabConfig::load_from_path("lab.yaml").map_err(|e| e.to_string())?;
            assert_eq!(config.simulator.appends, 10);
            assert_eq!(config.telemetry, TelemetryConfig::default());
            Ok(())
        });
    }
}
