//! HTML2EXE option selector
//!
//! Inspects an HTML project folder (or takes a URL) and recommends the build
//! options used to package it as a desktop executable.

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod config_file;
pub mod error;
pub mod logic;
pub mod preset;
pub mod source;
pub mod types;

// Re-export main types for convenience
pub use analyzer::{FolderProfile, analyze, analyze_with_config};
pub use config::SelectorConfig;
pub use config_file::OptionsConfig;
pub use error::{Result, SelectorError};
pub use logic::rules::{Assignment, Condition, PresetField, RULES, Rule};
pub use logic::selector::{Explanation, FieldDecision, OptionSelector, recommend};
pub use preset::{BuildPreset, PresetOverrides};
pub use source::SourceDescriptor;
pub use types::{OptimizationProfile, PackagingMode};
