use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::config::{ContentSourceConfig, SourceType};
use crate::error::{ContentError, Result};

/// A configured source whose existence and kind have been confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedSource {
    File {
        path: PathBuf,
        size_bytes: u64,
        modified: SystemTime,
    },
    Directory {
        path: PathBuf,
    },
}

impl ResolvedSource {
    pub fn path(&self) -> &Path {
        match self {
            Self::File { path, .. } | Self::Directory { path } => path,
        }
    }

    pub fn source_type(&self) -> SourceType {
        match self {
            Self::File { .. } => SourceType::File,
            Self::Directory { .. } => SourceType::Directory,
        }
    }
}

/// Validate the configured path against its declared kind. Read-only.
pub fn resolve(config: &ContentSourceConfig) -> Result<ResolvedSource> {
    let path = config
        .source_path
        .as_deref()
        .ok_or(ContentError::NotConfigured)?;
    let kind = config.source_type;

    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(ContentError::NotFound {
                kind,
                path: path.to_path_buf(),
            });
        }
        Err(err) => return Err(ContentError::read(path, err)),
    };

    let kind_matches = match kind {
        SourceType::File => meta.is_file(),
        SourceType::Directory => meta.is_dir(),
    };
    if !kind_matches {
        return Err(ContentError::KindMismatch {
            kind,
            path: path.to_path_buf(),
        });
    }

    log::debug!("Resolved {kind} source {}", path.display());

    match kind {
        SourceType::File => Ok(ResolvedSource::File {
            path: path.to_path_buf(),
            size_bytes: meta.len(),
            modified: meta.modified().map_err(|err| ContentError::read(path, err))?,
        }),
        SourceType::Directory => Ok(ResolvedSource::Directory {
            path: path.to_path_buf(),
        }),
    }
}
