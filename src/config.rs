//! Selector configuration
//!
//! The heuristic constants the selector compares against. Defaults match the
//! long-standing behaviour: a 50 MiB large-project threshold, source maps,
//! TypeScript and stylesheet-preprocessor sources as development artifacts,
//! and absolute or protocol-relative URLs as external references.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 50 MiB
pub const DEFAULT_LARGE_PROJECT_BYTES: u64 = 50 * 1024 * 1024;

pub const DEFAULT_DEV_ARTIFACT_EXTENSIONS: &[&str] = &["map", "ts", "scss", "less"];

pub const DEFAULT_EXTERNAL_URL_PREFIXES: &[&str] = &["http://", "https://", "//"];

pub const DEFAULT_HTML_EXTENSIONS: &[&str] = &["html", "htm"];

/// Thresholds and pattern lists used when inspecting a folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectorConfig {
    /// Folders strictly larger than this are packaged as a directory
    pub large_project_bytes: u64,
    /// File extensions (without the dot) that mark development-only files
    pub dev_artifact_extensions: Vec<String>,
    /// Reference prefixes that make a script or stylesheet external
    pub external_url_prefixes: Vec<String>,
    /// File extensions scanned for external references
    pub html_extensions: Vec<String>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            large_project_bytes: DEFAULT_LARGE_PROJECT_BYTES,
            dev_artifact_extensions: to_strings(DEFAULT_DEV_ARTIFACT_EXTENSIONS),
            external_url_prefixes: to_strings(DEFAULT_EXTERNAL_URL_PREFIXES),
            html_extensions: to_strings(DEFAULT_HTML_EXTENSIONS),
        }
    }
}

impl SelectorConfig {
    /// Whether `path` has one of the development-artifact extensions
    pub fn is_dev_artifact(&self, path: &Path) -> bool {
        has_extension(path, &self.dev_artifact_extensions)
    }

    /// Whether `path` should be scanned for external references
    pub fn is_html(&self, path: &Path) -> bool {
        has_extension(path, &self.html_extensions)
    }

    /// Whether a `src`/`href` value points outside the project
    pub fn is_external_reference(&self, reference: &str) -> bool {
        let reference = reference.trim().to_ascii_lowercase();
        self.external_url_prefixes
            .iter()
            .any(|prefix| reference.starts_with(&prefix.to_ascii_lowercase()))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.large_project_bytes == 0 {
            anyhow::bail!("large_project_bytes must be greater than zero");
        }

        validate_extensions("dev_artifact_extensions", &self.dev_artifact_extensions)?;
        validate_extensions("html_extensions", &self.html_extensions)?;

        if self.external_url_prefixes.is_empty() {
            anyhow::bail!("external_url_prefixes must not be empty");
        }
        if self
            .external_url_prefixes
            .iter()
            .any(|p| p.trim().is_empty())
        {
            anyhow::bail!("external_url_prefixes cannot contain empty entries");
        }

        Ok(())
    }
}

fn validate_extensions(field: &str, extensions: &[String]) -> Result<()> {
    if extensions.is_empty() {
        anyhow::bail!("{} must not be empty", field);
    }
    for ext in extensions {
        if ext.is_empty() || ext.contains('.') || ext.contains(char::is_whitespace) {
            anyhow::bail!(
                "{} entry '{}' must be a bare extension like \"map\"",
                field,
                ext
            );
        }
    }
    Ok(())
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|candidate| candidate.eq_ignore_ascii_case(ext)))
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SelectorConfig::default();
        assert_eq!(config.large_project_bytes, 52_428_800);
        assert_eq!(config.dev_artifact_extensions, vec!["map", "ts", "scss", "less"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_dev_artifact_matching() {
        let config = SelectorConfig::default();
        assert!(config.is_dev_artifact(Path::new("app.js.map")));
        assert!(config.is_dev_artifact(Path::new("src/main.ts")));
        assert!(config.is_dev_artifact(Path::new("styles/site.SCSS")));
        assert!(!config.is_dev_artifact(Path::new("app.js")));
        assert!(!config.is_dev_artifact(Path::new("Makefile")));
        // Only the final extension counts
        assert!(!config.is_dev_artifact(Path::new("notes.ts.txt")));
    }

    #[test]
    fn test_external_reference() {
        let config = SelectorConfig::default();
        assert!(config.is_external_reference("https://cdn.example.com/lib.js"));
        assert!(config.is_external_reference("HTTP://cdn.example.com/lib.js"));
        assert!(config.is_external_reference("//cdn.example.com/lib.js"));
        assert!(!config.is_external_reference("js/app.js"));
        assert!(!config.is_external_reference("/js/app.js"));
        assert!(!config.is_external_reference("./css/site.css"));
    }

    #[test]
    fn test_validate_rejects_zero_threshold() {
        let config = SelectorConfig {
            large_project_bytes: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_dotted_extension() {
        let config = SelectorConfig {
            dev_artifact_extensions: vec![".map".to_string()],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("dev_artifact_extensions"));
    }

    #[test]
    fn test_validate_rejects_empty_lists() {
        let config = SelectorConfig {
            external_url_prefixes: Vec::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SelectorConfig {
            html_extensions: Vec::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
