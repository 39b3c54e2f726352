//! Document formats accepted for catalogs and configuration

use crate::error::ConfigError;
use std::path::Path;

/// Serialization format of a document on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// `.toml`
    Toml,
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl DocumentFormat {
    /// Detect format from the file extension
    ///
    /// # Errors
    /// Returns [`ConfigError::UnsupportedFormat`] for any other extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "toml" => Ok(DocumentFormat::Toml),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            "json" => Ok(DocumentFormat::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Read a document and detect its format
///
/// # Errors
/// Returns [`ConfigError::UnsupportedFormat`] for an unknown extension and
/// [`ConfigError::Io`] when the file cannot be read
pub fn read_document(path: &Path) -> Result<(String, DocumentFormat), ConfigError> {
    let format = DocumentFormat::from_path(path)?;
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), ?format, bytes = text.len(), "Read document");
    Ok((text, format))
}
