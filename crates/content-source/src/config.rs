use std::env;
use std::fmt;
use std::path::PathBuf;

pub const SOURCE_TYPE_ENV: &str = "CONTENT_SOURCE_TYPE";
pub const SOURCE_PATH_ENV: &str = "CONTENT_SOURCE_PATH";
pub const READ_MODE_ENV: &str = "CONTENT_SOURCE_READ_MODE";

/// Declared kind of the content source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceType {
    File,
    #[default]
    Directory,
}

impl SourceType {
    /// Only the exact value `file` selects file mode.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("file") => Self::File,
            _ => Self::Directory,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::File => "File",
            Self::Directory => "Directory",
        }
    }

    pub(crate) fn noun(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How per-file failures inside a directory scan are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadMode {
    /// Any unreadable file fails the whole call.
    #[default]
    Strict,
    /// Unreadable files are skipped and reported in `skipped_files`.
    BestEffort,
}

impl ReadMode {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("best_effort") => Self::BestEffort,
            _ => Self::Strict,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentSourceConfig {
    pub source_type: SourceType,
    pub source_path: Option<PathBuf>,
    pub read_mode: ReadMode,
}

impl ContentSourceConfig {
    pub fn new(source_type: SourceType, source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_type,
            source_path: Some(source_path.into()),
            read_mode: ReadMode::Strict,
        }
    }

    pub fn with_read_mode(mut self, read_mode: ReadMode) -> Self {
        self.read_mode = read_mode;
        self
    }

    /// Snapshot of the process environment. Call once per request.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let source_type = SourceType::parse(lookup(SOURCE_TYPE_ENV).as_deref());
        let read_mode = ReadMode::parse(lookup(READ_MODE_ENV).as_deref());
        // Blank counts as unset; anything else is used verbatim.
        let source_path = lookup(SOURCE_PATH_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Self {
            source_type,
            source_path,
            read_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_directory_mode() {
        let config = ContentSourceConfig::from_lookup(lookup_from(&[(SOURCE_PATH_ENV, "docs")]));
        assert_eq!(config.source_type, SourceType::Directory);
        assert_eq!(config.source_path, Some(PathBuf::from("docs")));
        assert_eq!(config.read_mode, ReadMode::Strict);
    }

    #[test]
    fn unknown_source_type_falls_back_to_directory() {
        for value in ["FILE", "files", "", "dir"] {
            let config = ContentSourceConfig::from_lookup(lookup_from(&[
                (SOURCE_TYPE_ENV, value),
                (SOURCE_PATH_ENV, "docs"),
            ]));
            assert_eq!(config.source_type, SourceType::Directory, "value {value:?}");
        }
    }

    #[test]
    fn file_mode_is_selected_explicitly() {
        let config = ContentSourceConfig::from_lookup(lookup_from(&[
            (SOURCE_TYPE_ENV, "file"),
            (SOURCE_PATH_ENV, "/srv/guide.md"),
        ]));
        assert_eq!(
            config,
            ContentSourceConfig::new(SourceType::File, "/srv/guide.md")
        );
    }

    #[test]
    fn blank_path_counts_as_unset() {
        let config = ContentSourceConfig::from_lookup(lookup_from(&[(SOURCE_PATH_ENV, "   ")]));
        assert_eq!(config.source_path, None);

        let config = ContentSourceConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.source_path, None);
    }

    #[test]
    fn path_is_kept_verbatim() {
        let config =
            ContentSourceConfig::from_lookup(lookup_from(&[(SOURCE_PATH_ENV, " docs/notes ")]));
        assert_eq!(config.source_path, Some(PathBuf::from(" docs/notes ")));
    }

    #[test]
    fn best_effort_mode_is_opt_in() {
        let config = ContentSourceConfig::from_lookup(lookup_from(&[
            (SOURCE_PATH_ENV, "docs"),
            (READ_MODE_ENV, "best_effort"),
        ]));
        assert_eq!(config.read_mode, ReadMode::BestEffort);

        let config = ContentSourceConfig::from_lookup(lookup_from(&[
            (SOURCE_PATH_ENV, "docs"),
            (READ_MODE_ENV, "lenient"),
        ]));
        assert_eq!(config.read_mode, ReadMode::Strict);
    }
}
