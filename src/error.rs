//! Error types for CEML
//!
//! Library code returns `CemlResult`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{FsError, GeneratorError};

/// Result type alias for CEML operations
pub type CemlResult<T> = Result<T, CemlError>;

/// Main error type for CEML operations
#[derive(Error, Debug)]
pub enum CemlError {
    /// Output format outside the supported set
    #[error("unknown format '{format}' (expected one of: json, sql, sql-schema, sql-insert, plantuml)")]
    UnsupportedFormat { format: String },

    /// Source document could not be deserialized
    #[error("invalid model document {file}: {message}")]
    InvalidDocument { file: PathBuf, message: String },

    /// A reference in the source document names an entity that does not exist
    #[error("{from} references unknown {kind} '{id}'")]
    UnresolvedReference {
        kind: &'static str,
        id: String,
        from: String,
    },

    /// Two entities share the same identity
    #[error("duplicate identity '{id}' (first declared as {first}, again as {second})")]
    DuplicateId {
        id: String,
        first: &'static str,
        second: &'static str,
    },

    /// An actor reference points at an actor of the wrong kind
    #[error("{from} expects a {expected} but '{id}' is a {actual}")]
    ActorKindMismatch {
        id: String,
        from: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Generator failure (including unimplemented formats)
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    /// File system port failure
    #[error(transparent)]
    FileSystem(#[from] FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
