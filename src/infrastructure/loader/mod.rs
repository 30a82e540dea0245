//! Model loading
//!
//! Reads a model document through the [`FileSystem`] port, deserializes it
//! according to its extension and resolves every reference.

mod document;
mod resolver;

use std::path::Path;

use crate::domain::entities::Economy;
use crate::domain::ports::{FileSystem, ModelLoader};
use crate::error::{CemlError, CemlResult};

pub use document::EconomyDocument;

/// Serialization of a model document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
    Toml,
}

impl DocumentFormat {
    /// `.json` and `.toml` by extension; everything else is read as YAML
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => DocumentFormat::Json,
            Some("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Parse and resolve model text; `file` only labels errors
pub fn parse_economy(text: &str, format: DocumentFormat, file: &Path) -> CemlResult<Economy> {
    let invalid = |message: String| CemlError::InvalidDocument {
        file: file.to_path_buf(),
        message,
    };

    let doc: EconomyDocument = match format {
        DocumentFormat::Yaml => serde_yaml_ng::from_str(text).map_err(|e| invalid(e.to_string()))?,
        DocumentFormat::Json => serde_json::from_str(text).map_err(|e| invalid(e.to_string()))?,
        DocumentFormat::Toml => toml::from_str(text).map_err(|e| invalid(e.to_string()))?,
    };

    resolver::resolve(doc, file)
}

/// [`ModelLoader`] backed by a [`FileSystem`]
pub struct FsModelLoader<F: FileSystem> {
    fs: F,
}

impl<F: FileSystem> FsModelLoader<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }
}

impl<F: FileSystem> ModelLoader for FsModelLoader<F> {
    fn load(&self, path: &Path) -> CemlResult<Economy> {
        let format = DocumentFormat::from_path(path);
        tracing::debug!(path = %path.display(), ?format, "loading model");

        let text = self.fs.read(path)?;
        let economy = parse_economy(&text, format, path)?;

        tracing::info!(
            economy = economy.name(),
            entities = economy.entity_count(),
            "model loaded"
        );
        Ok(economy)
    }
}
