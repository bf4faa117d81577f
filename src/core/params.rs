use serde::{Deserialize, Serialize};

use crate::types::OutputFormat;

/// Processing parameters suitable for config files
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingParams {
    pub format: OutputFormat,
    /// If true, whitespace-only lines produce no output instead of a diagnostic
    pub skip_blank: bool,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            skip_blank: false,
        }
    }
}

impl ProcessingParams {
    pub fn from_json_file(path: &std::path::Path) -> crate::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
