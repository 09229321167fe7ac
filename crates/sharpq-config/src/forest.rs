//! `[forest]` section: how a project directory becomes a parse forest.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sharpq_query::{LoadOptions, entry_path_from_build_output};

use crate::ConfigError;

fn default_build_output_marker() -> String {
    "obj".to_string()
}

fn default_skip_dirs() -> Vec<String> {
    vec!["bin".to_string(), "obj".to_string()]
}

const fn default_respect_gitignore() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ForestConfig {
    /// Directory name that marks build output. A path inside it is cut back
    /// to the project directory when resolving the entry path.
    #[serde(default = "default_build_output_marker")]
    pub build_output_marker: String,

    /// Only load files matching this glob.
    #[serde(default)]
    pub include_glob: Option<String>,

    /// Never load files matching this glob.
    #[serde(default)]
    pub exclude_glob: Option<String>,

    /// Directory names never descended into.
    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,

    #[serde(default = "default_respect_gitignore")]
    pub respect_gitignore: bool,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            build_output_marker: default_build_output_marker(),
            include_glob: None,
            exclude_glob: None,
            skip_dirs: default_skip_dirs(),
            respect_gitignore: default_respect_gitignore(),
        }
    }
}

impl ForestConfig {
    #[must_use]
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            include_glob: self.include_glob.clone(),
            exclude_glob: self.exclude_glob.clone(),
            skip_dirs: self.skip_dirs.clone(),
            respect_gitignore: self.respect_gitignore,
        }
    }

    /// Project directory for `path`: cut at the build-output marker when
    /// `path` lies inside build output, otherwise `path` itself.
    #[must_use]
    pub fn entry_path_for(&self, path: &Path) -> PathBuf {
        entry_path_from_build_output(path, &self.build_output_marker)
            .unwrap_or_else(|| path.to_path_buf())
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let marker = self.build_output_marker.trim();
        if marker.is_empty() || marker.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                field: "forest.build_output_marker",
                value: self.build_output_marker.clone(),
                expected: "a single directory name",
            });
        }
        Ok(())
    }
}
