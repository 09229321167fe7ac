//! # sharpq-config
//!
//! Layered configuration for the sharpq loader and CLI, built with figment.
//!
//! Sources, highest priority first:
//! 1. Environment variables (`SHARPQ_*`, `__` separates sections)
//! 2. Project-level `.sharpq/config.toml`
//! 3. User-level `~/.config/sharpq/config.toml`
//! 4. Built-in defaults
//!
//! `SHARPQ_FOREST__EXCLUDE_GLOB` maps to `forest.exclude_glob`,
//! `SHARPQ_OUTPUT__FORMAT` to `output.format`.

mod error;
mod forest;
mod output;

pub use error::ConfigError;
pub use forest::ForestConfig;
pub use output::{OUTPUT_FORMATS, OutputConfig};

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "SHARPQ_";
const LOCAL_CONFIG: &str = ".sharpq/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SharpqConfig {
    #[serde(default)]
    pub forest: ForestConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl SharpqConfig {
    /// Load from all layers, resolving the project file against the current
    /// directory. Does not read `.env`; see [`load_with_dotenv`](Self::load_with_dotenv).
    ///
    /// # Errors
    /// Returns [`ConfigError`] if a layer fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment())
    }

    /// Load `.env` first, then every layer.
    ///
    /// # Errors
    /// Same as [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load with the project file resolved against `project_root`.
    ///
    /// # Errors
    /// Same as [`load`](Self::load).
    pub fn load_for(project_root: &Path) -> Result<Self, ConfigError> {
        let _ = dotenvy::from_path(project_root.join(".env"));
        Self::extract(Self::figment_for(project_root))
    }

    /// The provider chain for the current directory, exposed so tests and
    /// callers can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::layered(Self::global_config_path(), PathBuf::from(LOCAL_CONFIG))
    }

    #[must_use]
    pub fn figment_for(project_root: &Path) -> Figment {
        Self::layered(Self::global_config_path(), project_root.join(LOCAL_CONFIG))
    }

    fn layered(global: Option<PathBuf>, local: PathBuf) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global) = global.filter(|path| path.exists()) {
            figment = figment.merge(Toml::file(global));
        }
        if local.exists() {
            figment = figment.merge(Toml::file(local));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.forest.validate()?;
        config.output.validate()?;
        Ok(config)
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sharpq").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_extract_without_files() {
        Jail::expect_with(|_jail| {
            let config = SharpqConfig::extract(SharpqConfig::layered(None, "missing.toml".into()))
                .expect("defaults should extract");
            assert_eq!(config, SharpqConfig::default());
            Ok(())
        });
    }

    #[test]
    fn local_layer_beats_global_layer() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "global.toml",
                r#"
[output]
format = "table"
limit = 5
"#,
            )?;
            jail.create_file(
                "local.toml",
                r#"
[output]
format = "raw"
"#,
            )?;

            let config = SharpqConfig::extract(SharpqConfig::layered(
                Some("global.toml".into()),
                "local.toml".into(),
            ))
            .expect("layers should extract");

            assert_eq!(config.output.format, "raw");
            assert_eq!(config.output.limit, Some(5));
            Ok(())
        });
    }

    #[test]
    fn env_beats_every_file() {
        Jail::expect_with(|jail| {
            jail.create_file("local.toml", "[forest]\nbuild_output_marker = \"bin\"\n")?;
            jail.set_env("SHARPQ_FOREST__BUILD_OUTPUT_MARKER", "out");

            let config = SharpqConfig::extract(SharpqConfig::layered(None, "local.toml".into()))
                .expect("layers should extract");

            assert_eq!(config.forest.build_output_marker, "out");
            Ok(())
        });
    }

    #[test]
    fn invalid_values_fail_extraction() {
        Jail::expect_with(|jail| {
            jail.set_env("SHARPQ_OUTPUT__FORMAT", "yaml");

            let err = SharpqConfig::extract(SharpqConfig::layered(None, "missing.toml".into()))
                .unwrap_err();

            assert!(matches!(
                err,
                ConfigError::InvalidValue {
                    field: "output.format",
                    ..
                }
            ));
            Ok(())
        });
    }
}
