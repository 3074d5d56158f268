//! Configuration file loading.
//!
//! An optional JSON file tunes the selector heuristics and pins preset
//! fields. Both sections may be omitted:
//!
//! ```json
//! {
//!   "selector": { "large_project_bytes": 104857600 },
//!   "overrides": { "console": true }
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::SelectorConfig;
use crate::logic::selector::OptionSelector;
use crate::preset::PresetOverrides;

/// Selector configuration as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionsConfig {
    pub selector: SelectorConfig,
    pub overrides: PresetOverrides,
}

impl OptionsConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse configuration JSON in {:?}", path.as_ref()))?;

        Ok(config)
    }

    /// Load and validate, or fall back to defaults when no path is given
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.selector
            .validate()
            .context("Invalid selector configuration")
    }

    /// Build a selector, with `extra` overrides layered on top of the file's
    pub fn into_selector(self, extra: &PresetOverrides) -> OptionSelector {
        let overrides = self.overrides.merged_with(extra);
        OptionSelector::new(self.selector, overrides)
    }
}
