//! `[output]` section: default rendering for CLI results.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

pub const OUTPUT_FORMATS: [&str; 3] = ["json", "table", "raw"];

fn default_format() -> String {
    "json".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// One of `json`, `table`, `raw`.
    #[serde(default = "default_format")]
    pub format: String,

    /// Maximum number of rows printed; unlimited when unset.
    #[serde(default)]
    pub limit: Option<u32>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            limit: None,
        }
    }
}

impl OutputConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !OUTPUT_FORMATS.contains(&self.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "output.format",
                value: self.format.clone(),
                expected: "one of json, table, raw",
            });
        }
        if self.limit == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "output.limit",
                value: "0".to_string(),
                expected: "a positive row count",
            });
        }
        Ok(())
    }
}
