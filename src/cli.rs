use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::preset::PresetOverrides;
use crate::types::{OptimizationProfile, PackagingMode};

/// HTML2EXE - pick build options for packaging an HTML app as a desktop executable
#[derive(Parser)]
#[command(name = "html2exe")]
#[command(about = "Inspects an HTML folder or URL and recommends executable build options")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect a source folder and print what was found
    Analyze {
        /// Folder path, or an http(s) URL
        source: String,

        /// Selector configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the profile as JSON
        #[arg(long)]
        json: bool,
    },
    /// Recommend build options for a source
    Recommend {
        /// Folder path, or an http(s) URL
        source: String,

        /// Selector configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        overrides: OverrideArgs,

        /// Show which rule decided each option
        #[arg(long)]
        explain: bool,

        /// Print the preset as a JSON object
        #[arg(long)]
        json: bool,
    },
    /// List the recommendation rules in priority order
    Rules,
    /// Validate a selector configuration file
    Validate {
        /// Path to configuration file to validate
        config: PathBuf,
    },
}

/// Per-field overrides; these beat both the rule table and the config file
#[derive(Args, Debug, Default)]
pub struct OverrideArgs {
    /// Force the packaging mode (single-file, directory)
    #[arg(long)]
    pub packaging: Option<PackagingMode>,

    /// Force the optimization profile (balanced, size, production, portable)
    #[arg(long)]
    pub optimization: Option<OptimizationProfile>,

    /// Force offline asset caching on or off
    #[arg(long)]
    pub offline: Option<bool>,

    /// Force the console window on or off
    #[arg(long)]
    pub console: Option<bool>,
}

impl From<&OverrideArgs> for PresetOverrides {
    fn from(args: &OverrideArgs) -> Self {
        Self {
            packaging: args.packaging,
            optimization: args.optimization,
            offline: args.offline,
            console: args.console,
        }
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
