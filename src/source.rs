//! Source descriptors: what is being packaged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Result, SelectorError};

/// URL schemes that mark a source argument as a remote address.
const URL_SCHEMES: &[&str] = &["http://", "https://"];

/// A local HTML folder or a remote URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceDescriptor {
    Folder { path: PathBuf },
    Url { address: String },
}

impl SourceDescriptor {
    pub fn folder(path: impl AsRef<Path>) -> Self {
        Self::Folder {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn url(address: impl Into<String>) -> Self {
        Self::Url {
            address: address.into(),
        }
    }

    /// Classify a command-line source argument.
    ///
    /// Arguments starting with `http://` or `https://` (any case) are URLs and
    /// must parse as such; everything else is treated as a folder path. No
    /// filesystem access happens here.
    pub fn parse(arg: &str) -> Result<Self> {
        let trimmed = arg.trim();
        let lower = trimmed.to_ascii_lowercase();

        if URL_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
            let parsed =
                url::Url::parse(trimmed).map_err(|e| SelectorError::invalid_url(trimmed, e))?;
            if parsed.host_str().is_none_or(str::is_empty) {
                return Err(SelectorError::invalid_url(trimmed, "missing host"));
            }
            return Ok(Self::url(parsed.as_str()));
        }

        Ok(Self::folder(arg))
    }

    pub fn is_url(&self) -> bool {
        matches!(self, Self::Url { .. })
    }
}

impl fmt::Display for SourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Folder { path } => write!(f, "folder {}", path.display()),
            Self::Url { address } => write!(f, "url {}", address),
        }
    }
}
