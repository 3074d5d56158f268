//! Option selection
//!
//! Turns a source and its profile into a `BuildPreset` by running the ordered
//! rule table from `rules.rs`, then layering caller overrides on top.
//!
//! - **Deterministic**: same descriptor and profile, same preset
//! - **Total**: every field is decided; unconditional rules close the table
//! - **Overrides last**: a field set by the caller always beats the table

use serde::Serialize;
use tracing::{debug, info};

use crate::analyzer::{self, FolderProfile};
use crate::config::SelectorConfig;
use crate::error::Result;
use crate::logic::rules::{Assignment, PresetField, RULES, RuleInput};
use crate::preset::{BuildPreset, PresetOverrides};
use crate::source::SourceDescriptor;
use crate::types::{OptimizationProfile, PackagingMode};

/// Name reported for fields decided by a caller override
pub const OVERRIDE_RULE: &str = "override";

/// Name reported if the table left a field unassigned
const DEFAULT_RULE: &str = "default";

/// Which rule decided one preset field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDecision {
    pub field: PresetField,
    pub rule: &'static str,
}

/// A preset together with the rule behind each of its fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub preset: BuildPreset,
    pub decisions: Vec<FieldDecision>,
}

impl Explanation {
    pub fn rule_for(&self, field: PresetField) -> Option<&'static str> {
        self.decisions
            .iter()
            .find(|d| d.field == field)
            .map(|d| d.rule)
    }
}

/// Recommend a preset using the default threshold and no overrides.
///
/// A folder descriptor without a profile is treated as an empty folder.
pub fn recommend(descriptor: &SourceDescriptor, profile: Option<&FolderProfile>) -> BuildPreset {
    OptionSelector::default().recommend(descriptor, profile)
}

/// Analyzer plus rule table, parameterised by configuration and overrides
#[derive(Debug, Clone, Default)]
pub struct OptionSelector {
    config: SelectorConfig,
    overrides: PresetOverrides,
}

impl OptionSelector {
    pub fn new(config: SelectorConfig, overrides: PresetOverrides) -> Self {
        Self { config, overrides }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn overrides(&self) -> &PresetOverrides {
        &self.overrides
    }

    /// Inspect the source; `None` for URLs.
    pub fn analyze(&self, descriptor: &SourceDescriptor) -> Result<Option<FolderProfile>> {
        analyzer::analyze_with_config(descriptor, &self.config)
    }

    /// Run the rule table and apply overrides.
    pub fn recommend(
        &self,
        descriptor: &SourceDescriptor,
        profile: Option<&FolderProfile>,
    ) -> BuildPreset {
        self.explain(descriptor, profile).preset
    }

    /// Like `recommend`, also reporting which rule decided each field.
    pub fn explain(
        &self,
        descriptor: &SourceDescriptor,
        profile: Option<&FolderProfile>,
    ) -> Explanation {
        let empty = FolderProfile::default();
        let input = RuleInput {
            is_url: descriptor.is_url(),
            profile: profile.unwrap_or(&empty),
            large_project_bytes: self.config.large_project_bytes,
        };

        let mut draft = Draft::default();
        for rule in RULES.iter().filter(|rule| rule.matches(&input)) {
            debug!("Rule '{}' matched for {}", rule.name, descriptor);
            for assignment in rule.set {
                draft.assign(*assignment, rule.name);
            }
        }

        let mut explanation = draft.finish();
        explanation.preset = explanation.preset.with_overrides(&self.overrides);
        for decision in &mut explanation.decisions {
            if self.overrides.sets(decision.field) {
                decision.rule = OVERRIDE_RULE;
            }
        }
        explanation
    }

    /// Analyze then recommend. IO errors from the scan are returned as-is.
    pub fn select(&self, descriptor: &SourceDescriptor) -> Result<BuildPreset> {
        let profile = self.analyze(descriptor)?;
        let preset = self.recommend(descriptor, profile.as_ref());
        info!("Recommended preset for {}: {}", descriptor, preset);
        Ok(preset)
    }
}

/// Fields decided so far, with the rule that decided them
#[derive(Default)]
struct Draft {
    packaging: Option<(PackagingMode, &'static str)>,
    optimization: Option<(OptimizationProfile, &'static str)>,
    offline: Option<(bool, &'static str)>,
    console: Option<(bool, &'static str)>,
}

impl Draft {
    /// First assignment wins.
    fn assign(&mut self, assignment: Assignment, rule: &'static str) {
        match assignment {
            Assignment::Packaging(v) => {
                self.packaging.get_or_insert((v, rule));
            }
            Assignment::Optimization(v) => {
                self.optimization.get_or_insert((v, rule));
            }
            Assignment::Offline(v) => {
                self.offline.get_or_insert((v, rule));
            }
            Assignment::Console(v) => {
                self.console.get_or_insert((v, rule));
            }
        }
    }

    fn finish(self) -> Explanation {
        let (packaging, packaging_rule) = self
            .packaging
            .unwrap_or((PackagingMode::default(), DEFAULT_RULE));
        let (optimization, optimization_rule) = self
            .optimization
            .unwrap_or((OptimizationProfile::default(), DEFAULT_RULE));
        let (offline, offline_rule) = self.offline.unwrap_or((false, DEFAULT_RULE));
        let (console, console_rule) = self.console.unwrap_or((false, DEFAULT_RULE));

        Explanation {
            preset: BuildPreset {
                packaging,
                optimization,
                offline,
                console,
            },
            decisions: vec![
                FieldDecision {
                    field: PresetField::Packaging,
                    rule: packaging_rule,
                },
                FieldDecision {
                    field: PresetField::Optimization,
                    rule: optimization_rule,
                },
                FieldDecision {
                    field: PresetField::Offline,
                    rule: offline_rule,
                },
                FieldDecision {
                    field: PresetField::Console,
                    rule: console_rule,
                },
            ],
        }
    }
}
