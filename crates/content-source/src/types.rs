use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::time::SystemTime;

/// Result of a `content_get_raw` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aggregation {
    /// File text, or the trimmed concatenation of every matched file.
    pub content: String,
    /// Human-readable description of what was read.
    pub source_info: String,
    pub total_files: usize,
    /// Sum of on-disk sizes; separators are not counted.
    pub size_bytes: u64,
    /// ISO-8601 UTC timestamp of the newest contributing file.
    pub last_modified: String,
    /// Only populated in best-effort mode.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped_files: Vec<SkippedFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub path: String,
    pub error: String,
}

/// Marker placed before each file's content in directory mode.
pub fn separator(relative_path: &str) -> String {
    format!("\n\n<!-- ========== ARCHIVO: {relative_path} ========== -->\n\n")
}

/// Millisecond precision with a `Z` suffix, e.g. `2024-05-01T10:20:30.123Z`.
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Millis, true)
}
