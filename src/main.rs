//! HTML2EXE - Main entry point
//!
//! Thin command-line front end over the option selector library.

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use html2exe::cli::{Cli, Commands};
use html2exe::logic::rules::RULES;
use html2exe::logic::selector::Explanation;
use html2exe::{FolderProfile, OptionsConfig, PresetOverrides, SourceDescriptor};

/// Initialize logging to stderr, leaving stdout for results
fn init_logger(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("html2exe=debug")
    } else if quiet {
        EnvFilter::new("html2exe=error")
    } else {
        // RUST_LOG overrides the default
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("html2exe=warn"))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Main application entry point
fn main() {
    let cli = Cli::parse_args();
    init_logger(cli.verbose, cli.quiet);
    debug!("CLI arguments parsed");

    if let Err(e) = run(cli.command) {
        debug!("Command failed: {:?}", e);
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Analyze {
            source,
            config,
            json,
        } => {
            let descriptor = SourceDescriptor::parse(&source)?;
            let selector = OptionsConfig::load_optional(config.as_deref())?
                .into_selector(&PresetOverrides::default());
            let profile = selector
                .analyze(&descriptor)
                .with_context(|| format!("Failed to analyze {}", descriptor))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                print_profile(&descriptor, profile.as_ref());
            }
        }
        Commands::Recommend {
            source,
            config,
            overrides,
            explain,
            json,
        } => {
            let descriptor = SourceDescriptor::parse(&source)?;
            let selector = OptionsConfig::load_optional(config.as_deref())?
                .into_selector(&PresetOverrides::from(&overrides));
            info!("Recommending options for {}", descriptor);

            let profile = selector
                .analyze(&descriptor)
                .with_context(|| format!("Failed to analyze {}", descriptor))?;
            let explanation = selector.explain(&descriptor, profile.as_ref());

            if json && explain {
                println!("{}", serde_json::to_string_pretty(&explanation)?);
            } else if json {
                println!("{}", serde_json::to_string(&explanation.preset)?);
            } else {
                print_explanation(&descriptor, &explanation, explain);
            }
        }
        Commands::Rules => print_rules(),
        Commands::Validate { config } => {
            info!("Validating configuration file: {:?}", config);
            let loaded = OptionsConfig::load_from_file(&config)?;
            loaded.validate()?;
            println!("✓ Configuration file is valid: {}", config.display());
        }
    }

    Ok(())
}

fn print_profile(descriptor: &SourceDescriptor, profile: Option<&FolderProfile>) {
    println!("Source:          {}", descriptor);
    let Some(profile) = profile else {
        println!("Analysis is not applicable to URL sources");
        return;
    };

    println!("Files:           {}", profile.file_count);
    println!(
        "Total size:      {:.2} MiB ({} bytes)",
        profile.total_mib(),
        profile.total_bytes
    );
    println!("Dev artifacts:   {}", profile.dev_artifact_count);
    for path in &profile.dev_artifacts {
        println!("  {}", path.display());
    }
    println!(
        "External refs:   {}",
        if profile.has_external_references { "yes" } else { "no" }
    );
    if profile.skipped_entries > 0 {
        println!("Skipped entries: {}", profile.skipped_entries);
    }
}

fn print_explanation(descriptor: &SourceDescriptor, explanation: &Explanation, explain: bool) {
    let preset = &explanation.preset;
    println!("Recommended options for {}", descriptor);

    let rows = [
        ("packaging", preset.packaging.to_string()),
        ("optimization", preset.optimization.to_string()),
        ("offline", preset.offline.to_string()),
        ("console", preset.console.to_string()),
    ];
    for ((field, value), decision) in rows.iter().zip(&explanation.decisions) {
        if explain {
            println!("  {:<14}{:<14}({})", field, value, decision.rule);
        } else {
            println!("  {:<14}{}", field, value);
        }
    }
}

fn print_rules() {
    for (index, rule) in RULES.iter().enumerate() {
        let sets: Vec<String> = rule.set.iter().map(|a| a.to_string()).collect();
        println!(
            "{:>2}. {:<20} when {:<24} sets {}",
            index + 1,
            rule.name,
            rule.when,
            sets.join(", ")
        );
    }
}
