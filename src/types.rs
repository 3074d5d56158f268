//! Type-safe build option values
//!
//! The preset fields that have a closed set of values are proper enums rather
//! than strings. The `strum` string forms are the same strings used in the
//! serialized preset and on the command line, so a value printed by one
//! surface parses back in every other.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Whether the build produces one consolidated binary or a binary plus an
/// accompanying asset directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PackagingMode {
    #[default]
    SingleFile,
    Directory,
}

/// Named size/speed trade-off applied to the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum OptimizationProfile {
    #[default]
    Balanced,
    Size,
    Production,
    Portable,
}
