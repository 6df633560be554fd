use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::config::ReadMode;
use crate::error::Result;
use crate::types::SkippedFile;

const MARKDOWN_EXTENSION: &str = "md";

/// A matched file, addressed both absolutely and relative to the scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownFile {
    pub path: PathBuf,
    /// `/`-separated regardless of platform.
    pub relative: String,
}

#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Sorted by `relative`.
    pub files: Vec<MarkdownFile>,
    pub skipped: Vec<SkippedFile>,
}

/// Recursive `**/*.md` scanner. Hidden entries below the root are skipped.
pub struct MarkdownScanner {
    root: PathBuf,
}

impl MarkdownScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn scan(&self, mode: ReadMode) -> Result<ScanOutcome> {
        let mut outcome = ScanOutcome::default();

        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !Self::is_hidden(entry));

        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => match mode {
                    ReadMode::Strict => return Err(err.into()),
                    ReadMode::BestEffort => {
                        log::warn!("Skipping unreadable entry: {err}");
                        let path = err
                            .path()
                            .map(|p| self.relative_or_display(p))
                            .unwrap_or_default();
                        outcome.skipped.push(SkippedFile {
                            path,
                            error: err.to_string(),
                        });
                        continue;
                    }
                },
            };

            if !Self::is_markdown_file(&entry) {
                continue;
            }

            let Some(relative) = Self::relative_path(&self.root, entry.path()) else {
                continue;
            };
            log::debug!("Matched {relative}");
            outcome.files.push(MarkdownFile {
                path: entry.into_path(),
                relative,
            });
        }

        outcome.files.sort_by(|a, b| a.relative.cmp(&b.relative));
        log::info!(
            "Found {} .md files under {}",
            outcome.files.len(),
            self.root.display()
        );
        Ok(outcome)
    }

    fn is_hidden(entry: &DirEntry) -> bool {
        entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
    }

    fn is_markdown_file(entry: &DirEntry) -> bool {
        let file_type = entry.file_type();
        if file_type.is_dir() {
            return false;
        }
        let has_extension = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == MARKDOWN_EXTENSION);
        if !has_extension {
            return false;
        }
        // Symlinked files count; symlinked directories are never descended.
        file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
    }

    fn relative_path(root: &Path, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(root).ok()?;
        let parts: Vec<String> = relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        if parts.is_empty() {
            return None;
        }
        Some(parts.join("/"))
    }

    fn relative_or_display(&self, path: &Path) -> String {
        Self::relative_path(&self.root, path).unwrap_or_else(|| path.display().to_string())
    }
}
