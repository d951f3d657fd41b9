use crate::browser::DEFAULT_PAGE_SIZE;
use crate::error::{BikeshareError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Runtime settings. Every field has a default, so a settings file only needs
/// the keys it changes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory holding `chicago.csv`, `new_york_city.csv` and `washington.csv`
    pub data_dir: PathBuf,
    /// Rows per window in the row browser
    pub page_size: usize,
    /// When set, logs are also written to daily files in this directory
    pub log_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            page_size: DEFAULT_PAGE_SIZE,
            log_dir: None,
        }
    }
}

impl Settings {
    /// Reads settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BikeshareError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(BikeshareError::Config(
                "page_size must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}
