//! Source folder inspection
//!
//! Walks an HTML project and condenses it into a `FolderProfile`: how big it
//! is, how many files it has, which files are development-only artifacts, and
//! whether any page pulls a script or stylesheet from outside the project.
//!
//! # Failure model
//!
//! - The root must exist, be a directory and be listable, otherwise the scan
//!   fails with `SelectorError::Io` and nothing is recommended.
//! - A file below the root counts toward the totals only if it can be
//!   opened (HTML pages that still need a reference scan: read in full).
//!   Anything that cannot be walked, stat'ed or opened is left out of the
//!   totals and counted once in `skipped_entries` instead. One broken asset
//!   never blocks a recommendation.
//!
//! The walk is read-only and follows symlinks; a dangling link counts as a
//! skipped entry.

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::SelectorConfig;
use crate::error::{Result, SelectorError};
use crate::source::SourceDescriptor;

/// Facts gathered from a source folder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderProfile {
    /// Sum of the sizes of all readable regular files
    pub total_bytes: u64,
    /// Number of readable regular files; unreadable ones are never included
    pub file_count: u64,
    /// Number of files matching the development-artifact extensions
    pub dev_artifact_count: u64,
    /// True if any HTML file loads a script or stylesheet from a non-relative URL
    pub has_external_references: bool,
    /// Entries left out of the totals because they could not be walked, stat'ed or opened
    pub skipped_entries: u64,
    /// Development artifacts relative to the root, sorted
    pub dev_artifacts: Vec<PathBuf>,
}

impl FolderProfile {
    pub fn has_dev_artifacts(&self) -> bool {
        self.dev_artifact_count > 0
    }

    /// Total size in mebibytes, for display
    pub fn total_mib(&self) -> f64 {
        self.total_bytes as f64 / (1024.0 * 1024.0)
    }
}

/// Inspect a source with the default selector configuration.
///
/// Returns `Ok(None)` for URL sources, where there is nothing to inspect.
pub fn analyze(descriptor: &SourceDescriptor) -> Result<Option<FolderProfile>> {
    analyze_with_config(descriptor, &SelectorConfig::default())
}

/// Inspect a source using the given thresholds and pattern lists.
pub fn analyze_with_config(
    descriptor: &SourceDescriptor,
    config: &SelectorConfig,
) -> Result<Option<FolderProfile>> {
    match descriptor {
        SourceDescriptor::Url { address } => {
            debug!("Skipping analysis for URL source {}", address);
            Ok(None)
        }
        SourceDescriptor::Folder { path } => scan_folder(path, config).map(Some),
    }
}

fn scan_folder(root: &Path, config: &SelectorConfig) -> Result<FolderProfile> {
    let metadata = fs::metadata(root).map_err(|e| SelectorError::io(root, e))?;
    if !metadata.is_dir() {
        return Err(SelectorError::io(
            root,
            std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
        ));
    }
    // Listing the root up front separates "cannot read the project" from
    // "cannot read one file in the project".
    fs::read_dir(root).map_err(|e| SelectorError::io(root, e))?;

    info!("Scanning source folder: {}", root.display());

    let mut profile = FolderProfile::default();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable entry: {}", err);
                profile.skipped_entries += 1;
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let size = match entry.metadata() {
            Ok(meta) => meta.len(),
            Err(err) => {
                warn!("Skipping {}: {}", path.display(), err);
                profile.skipped_entries += 1;
                continue;
            }
        };

        // A file only counts once it has been opened; pages still in need of
        // a reference scan are read in full here.
        let scan_html = !profile.has_external_references && config.is_html(path);
        let content = if scan_html {
            fs::read(path).map(Some)
        } else {
            fs::File::open(path).map(|_| None)
        };
        let content = match content {
            Ok(content) => content,
            Err(err) => {
                warn!("Skipping {}: {}", path.display(), err);
                profile.skipped_entries += 1;
                continue;
            }
        };

        profile.file_count += 1;
        profile.total_bytes += size;

        if config.is_dev_artifact(path) {
            profile.dev_artifact_count += 1;
            let relative = path.strip_prefix(root).unwrap_or(path);
            profile.dev_artifacts.push(relative.to_path_buf());
        }

        if let Some(bytes) = content {
            let html = String::from_utf8_lossy(&bytes);
            if let Some(reference) = find_external_reference(&html, config) {
                debug!("External reference in {}: {}", path.display(), reference);
                profile.has_external_references = true;
            }
        }
    }

    profile.dev_artifacts.sort();

    info!(
        "Scanned {} files ({} bytes), {} dev artifacts, external refs: {}, skipped: {}",
        profile.file_count,
        profile.total_bytes,
        profile.dev_artifact_count,
        profile.has_external_references,
        profile.skipped_entries
    );

    Ok(profile)
}

/// Find the first `<script src>` or stylesheet `<link href>` that points
/// outside the project, in document order.
///
/// Comments and script bodies are text to the parser, so tags inside them
/// are not references.
pub fn find_external_reference(html: &str, config: &SelectorConfig) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("script[src], link[href]").expect("valid reference selector");

    for element in document.select(&selector) {
        let element = element.value();
        let reference = match element.name() {
            "script" => element.attr("src"),
            "link" => {
                let is_stylesheet = element.attr("rel").is_some_and(|rel| {
                    rel.split_whitespace()
                        .any(|r| r.eq_ignore_ascii_case("stylesheet"))
                });
                if is_stylesheet { element.attr("href") } else { None }
            }
            _ => None,
        };

        if let Some(reference) = reference {
            if config.is_external_reference(reference) {
                return Some(reference.to_string());
            }
        }
    }
    None
}
