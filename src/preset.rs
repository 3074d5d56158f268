//! Build presets and caller overrides
//!
//! A `BuildPreset` is the selector's whole output contract: a flat mapping
//! with exactly four keys, consumed by whatever turns it into a bundler
//! command line.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::logic::rules::PresetField;
use crate::types::{OptimizationProfile, PackagingMode};

/// Recommended build configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildPreset {
    pub packaging: PackagingMode,
    pub optimization: OptimizationProfile,
    pub offline: bool,
    pub console: bool,
}

impl BuildPreset {
    /// Apply caller overrides; every field the overrides set wins.
    pub fn with_overrides(mut self, overrides: &PresetOverrides) -> Self {
        if let Some(packaging) = overrides.packaging {
            self.packaging = packaging;
        }
        if let Some(optimization) = overrides.optimization {
            self.optimization = optimization;
        }
        if let Some(offline) = overrides.offline {
            self.offline = offline;
        }
        if let Some(console) = overrides.console {
            self.console = console;
        }
        self
    }
}

impl fmt::Display for BuildPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "packaging={} optimization={} offline={} console={}",
            self.packaging, self.optimization, self.offline, self.console
        )
    }
}

/// Caller-supplied values that take precedence over the rule table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PresetOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging: Option<PackagingMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimization: Option<OptimizationProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub console: Option<bool>,
}

impl PresetOverrides {
    /// Whether the caller set a value for `field`.
    pub fn sets(&self, field: PresetField) -> bool {
        match field {
            PresetField::Packaging => self.packaging.is_some(),
            PresetField::Optimization => self.optimization.is_some(),
            PresetField::Offline => self.offline.is_some(),
            PresetField::Console => self.console.is_some(),
        }
    }

    /// Layer `other` on top of `self`; fields set in `other` win.
    pub fn merged_with(self, other: &PresetOverrides) -> Self {
        Self {
            packaging: other.packaging.or(self.packaging),
            optimization: other.optimization.or(self.optimization),
            offline: other.offline.or(self.offline),
            console: other.console.or(self.console),
        }
    }
}
