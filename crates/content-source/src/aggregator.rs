use std::fs;
use std::path::Path;
use std::time::SystemTime;

use crate::config::{ContentSourceConfig, ReadMode};
use crate::error::{ContentError, Result};
use crate::resolver::{resolve, ResolvedSource};
use crate::scanner::{MarkdownFile, MarkdownScanner};
use crate::types::{format_timestamp, separator, Aggregation, SkippedFile};

/// Resolve the configured source and aggregate it.
pub fn get_raw_content(config: &ContentSourceConfig) -> Result<Aggregation> {
    let source = resolve(config)?;
    aggregate(&source, config.read_mode)
}

pub fn aggregate(source: &ResolvedSource, mode: ReadMode) -> Result<Aggregation> {
    match source {
        ResolvedSource::File {
            path,
            size_bytes,
            modified,
        } => {
            let content = read_text(path)?;
            Ok(Aggregation {
                content,
                source_info: format!("Single file: {}", path.display()),
                total_files: 1,
                size_bytes: *size_bytes,
                last_modified: format_timestamp(*modified),
                skipped_files: Vec::new(),
            })
        }
        ResolvedSource::Directory { path } => aggregate_directory(path, mode),
    }
}

struct LoadedFile {
    text: String,
    size_bytes: u64,
    modified: SystemTime,
}

fn aggregate_directory(root: &Path, mode: ReadMode) -> Result<Aggregation> {
    let scan = MarkdownScanner::new(root).scan(mode)?;
    combine(root, &scan.files, scan.skipped, mode)
}

/// Concatenate `files` in the given order. Strict mode aborts on the first failure.
fn combine(
    root: &Path,
    files: &[MarkdownFile],
    mut skipped: Vec<SkippedFile>,
    mode: ReadMode,
) -> Result<Aggregation> {
    let mut combined = String::new();
    let mut total_files = 0usize;
    let mut size_bytes = 0u64;
    let mut latest: Option<SystemTime> = None;

    for file in files {
        let loaded = match load(file) {
            Ok(loaded) => loaded,
            Err(err) => match mode {
                ReadMode::Strict => return Err(err),
                ReadMode::BestEffort => {
                    log::warn!("Skipping {}: {err}", file.relative);
                    skipped.push(SkippedFile {
                        path: file.relative.clone(),
                        error: err.to_string(),
                    });
                    continue;
                }
            },
        };

        combined.push_str(&separator(&file.relative));
        combined.push_str(&loaded.text);
        total_files += 1;
        size_bytes += loaded.size_bytes;
        latest = Some(latest.map_or(loaded.modified, |seen| seen.max(loaded.modified)));
    }

    let Some(latest) = latest else {
        return Err(ContentError::EmptySource {
            path: root.to_path_buf(),
        });
    };

    log::info!(
        "Combined {total_files} .md files ({size_bytes} bytes) from {}",
        root.display()
    );

    Ok(Aggregation {
        content: trim_payload(&combined).to_string(),
        source_info: format!("Combined {total_files} .md files from: {}", root.display()),
        total_files,
        size_bytes,
        last_modified: format_timestamp(latest),
        skipped_files: skipped,
    })
}

/// Whitespace plus U+FEFF, so a stray BOM at either end is dropped too.
fn trim_payload(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn load(file: &MarkdownFile) -> Result<LoadedFile> {
    let text = read_text(&file.path)?;
    let meta = fs::metadata(&file.path).map_err(|err| ContentError::read(&file.path, err))?;
    let modified = meta
        .modified()
        .map_err(|err| ContentError::read(&file.path, err))?;
    Ok(LoadedFile {
        text,
        size_bytes: meta.len(),
        modified,
    })
}

/// Invalid UTF-8 is replaced, not rejected.
fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|err| ContentError::read(path, err))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}
