//! Ordered recommendation rule table
//!
//! Each rule is a predicate over the inspected source plus the preset fields
//! it assigns. Rules are evaluated top to bottom and the first matching rule
//! to assign a field decides it; later rules never overwrite.
//!
//! | # | Rule                  | When                         | Sets |
//! |---|-----------------------|------------------------------|------|
//! | 1 | `url-source`          | source is a URL              | single-file, portable, offline, no console |
//! | 2 | `large-folder`        | total size > threshold       | directory |
//! | 3 | `small-folder`        | always                       | single-file |
//! | 4 | `dev-artifacts`       | any development artifact     | production |
//! | 5 | `no-dev-artifacts`    | always                       | balanced |
//! | 6 | `external-references` | page loads a remote asset    | offline |
//! | 7 | `self-contained`      | always                       | not offline |
//! | 8 | `console-hidden`      | always                       | no console |
//!
//! The threshold comparison is strict: a folder of exactly the threshold size
//! is still packaged as a single file.

use serde::Serialize;
use strum::{Display, EnumIter};

use crate::analyzer::FolderProfile;
use crate::types::{OptimizationProfile, PackagingMode};

/// Everything a rule predicate may look at
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    pub is_url: bool,
    pub profile: &'a FolderProfile,
    pub large_project_bytes: u64,
}

/// Rule predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Condition {
    UrlSource,
    LargeFolder,
    HasDevArtifacts,
    HasExternalReferences,
    Always,
}

impl Condition {
    pub fn matches(&self, input: &RuleInput<'_>) -> bool {
        match self {
            Self::UrlSource => input.is_url,
            Self::LargeFolder => {
                !input.is_url && input.profile.total_bytes > input.large_project_bytes
            }
            Self::HasDevArtifacts => !input.is_url && input.profile.has_dev_artifacts(),
            Self::HasExternalReferences => !input.is_url && input.profile.has_external_references,
            Self::Always => true,
        }
    }
}

/// The four preset fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PresetField {
    Packaging,
    Optimization,
    Offline,
    Console,
}

/// A single field assignment made by a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Assignment {
    Packaging(PackagingMode),
    Optimization(OptimizationProfile),
    Offline(bool),
    Console(bool),
}

impl Assignment {
    pub fn field(&self) -> PresetField {
        match self {
            Self::Packaging(_) => PresetField::Packaging,
            Self::Optimization(_) => PresetField::Optimization,
            Self::Offline(_) => PresetField::Offline,
            Self::Console(_) => PresetField::Console,
        }
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Packaging(v) => write!(f, "packaging={}", v),
            Self::Optimization(v) => write!(f, "optimization={}", v),
            Self::Offline(v) => write!(f, "offline={}", v),
            Self::Console(v) => write!(f, "console={}", v),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Rule {
    pub name: &'static str,
    pub when: Condition,
    pub set: &'static [Assignment],
}

impl Rule {
    pub fn matches(&self, input: &RuleInput<'_>) -> bool {
        self.when.matches(input)
    }
}

/// The rule table, in priority order.
pub const RULES: &[Rule] = &[
    Rule {
        name: "url-source",
        when: Condition::UrlSource,
        set: &[
            Assignment::Packaging(PackagingMode::SingleFile),
            Assignment::Optimization(OptimizationProfile::Portable),
            Assignment::Offline(true),
            Assignment::Console(false),
        ],
    },
    Rule {
        name: "large-folder",
        when: Condition::LargeFolder,
        set: &[Assignment::Packaging(PackagingMode::Directory)],
    },
    Rule {
        name: "small-folder",
        when: Condition::Always,
        set: &[Assignment::Packaging(PackagingMode::SingleFile)],
    },
    Rule {
        name: "dev-artifacts",
        when: Condition::HasDevArtifacts,
        set: &[Assignment::Optimization(OptimizationProfile::Production)],
    },
    Rule {
        name: "no-dev-artifacts",
        when: Condition::Always,
        set: &[Assignment::Optimization(OptimizationProfile::Balanced)],
    },
    Rule {
        name: "external-references",
        when: Condition::HasExternalReferences,
        set: &[Assignment::Offline(true)],
    },
    Rule {
        name: "self-contained",
        when: Condition::Always,
        set: &[Assignment::Offline(false)],
    },
    Rule {
        name: "console-hidden",
        when: Condition::Always,
        set: &[Assignment::Console(false)],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn input(profile: &FolderProfile, is_url: bool) -> RuleInput<'_> {
        RuleInput {
            is_url,
            profile,
            large_project_bytes: 100,
        }
    }

    #[test]
    fn test_every_field_has_a_fallback() {
        for field in PresetField::iter() {
            assert!(
                RULES.iter().any(|r| {
                    r.when == Condition::Always && r.set.iter().any(|a| a.field() == field)
                }),
                "no unconditional rule for {}",
                field
            );
        }
    }

    #[test]
    fn test_url_rule_is_first() {
        assert_eq!(RULES[0].name, "url-source");
        assert_eq!(RULES[0].set.len(), 4);
    }

    #[test]
    fn test_conditional_rules_precede_their_fallbacks() {
        for field in PresetField::iter() {
            let positions: Vec<(usize, Condition)> = RULES
                .iter()
                .enumerate()
                .filter(|(_, r)| r.set.iter().any(|a| a.field() == field))
                .map(|(i, r)| (i, r.when))
                .collect();
            let fallback = positions
                .iter()
                .position(|(_, c)| *c == Condition::Always)
                .unwrap();
            assert_eq!(fallback, positions.len() - 1, "{} fallback is not last", field);
        }
    }

    #[test]
    fn test_rule_names_unique() {
        let mut names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), RULES.len());
    }

    #[test]
    fn test_large_folder_threshold_is_exclusive() {
        let at = FolderProfile {
            total_bytes: 100,
            ..Default::default()
        };
        let over = FolderProfile {
            total_bytes: 101,
            ..Default::default()
        };
        assert!(!Condition::LargeFolder.matches(&input(&at, false)));
        assert!(Condition::LargeFolder.matches(&input(&over, false)));
    }

    #[test]
    fn test_folder_conditions_never_match_urls() {
        let profile = FolderProfile {
            total_bytes: 1_000,
            dev_artifact_count: 1,
            has_external_references: true,
            ..Default::default()
        };
        let url = input(&profile, true);
        assert!(!Condition::LargeFolder.matches(&url));
        assert!(!Condition::HasDevArtifacts.matches(&url));
        assert!(!Condition::HasExternalReferences.matches(&url));
        assert!(Condition::UrlSource.matches(&url));
    }

    #[test]
    fn test_assignment_display() {
        assert_eq!(
            Assignment::Packaging(PackagingMode::Directory).to_string(),
            "packaging=directory"
        );
        assert_eq!(Assignment::Offline(true).to_string(), "offline=true");
    }
}
