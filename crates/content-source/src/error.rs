use std::path::PathBuf;
use thiserror::Error;

use crate::config::SourceType;

pub type Result<T> = std::result::Result<T, ContentError>;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("CONTENT_SOURCE_PATH not configured")]
    NotConfigured,

    #[error("{} not found: {}", kind.label(), path.display())]
    NotFound { kind: SourceType, path: PathBuf },

    #[error("Path is not a {}: {}", kind.noun(), path.display())]
    KindMismatch { kind: SourceType, path: PathBuf },

    #[error("No .md files found in directory: {}", path.display())]
    EmptySource { path: PathBuf },

    #[error("Failed to get raw content: {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to get raw content: {0}")]
    Walk(#[from] walkdir::Error),
}

impl ContentError {
    /// Stable category name, used in logs.
    pub fn category(&self) -> &'static str {
        match self {
            Self::NotConfigured => "ConfigurationError",
            Self::NotFound { .. } => "NotFoundError",
            Self::KindMismatch { .. } => "KindMismatchError",
            Self::EmptySource { .. } => "EmptySourceError",
            Self::Read { .. } | Self::Walk(_) => "ReadError",
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
