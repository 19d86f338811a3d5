//! Error types for the reader.
//!
//! Only input that cannot be loaded and documents whose root is not a
//! `Build` are errors. Malformed attributes and unknown elements are
//! absorbed while the tree is built.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the reader library.
#[derive(Debug, Error)]
pub enum ReaderError {
    /// Input file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input path is not usable (missing, or not a regular file).
    #[error("Invalid input path {}: {reason}", .path.display())]
    InvalidPath { path: PathBuf, reason: String },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Document root is not a `Build` element.
    #[error("Document root must be <Build>, found <{found}>")]
    RootNotBuild { found: String },

    /// Writing the tree as JSON or YAML failed.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ReaderError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<serde_yaml_ng::Error> for ReaderError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for reader operations.
pub type Result<T> = std::result::Result<T, ReaderError>;
