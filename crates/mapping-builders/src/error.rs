//! Error types for specification building and mapping files.

use std::path::PathBuf;

/// Errors raised while building specifications or reading/writing mapping files.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    /// A required argument was missing or blank. Raised before any state is touched.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON mapping: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML mapping: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported mapping file format: {0:?}")]
    UnsupportedFormat(PathBuf),
}

impl MappingError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        MappingError::InvalidArgument(message.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MappingError::Io {
            path: path.into(),
            source,
        }
    }

    /// The underlying I/O error kind, if this is an I/O failure.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            MappingError::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MappingError>;
