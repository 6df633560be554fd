//! # Content Source
//!
//! Raw markdown aggregation for the `content_get_raw` MCP tool.
//!
//! ## Pipeline
//!
//! ```text
//! ContentSourceConfig (CONTENT_SOURCE_TYPE / CONTENT_SOURCE_PATH)
//!     │
//!     ├──> Resolver (exists? right kind?)
//!     │      └─> ResolvedSource::File | ResolvedSource::Directory
//!     │
//!     └──> Aggregator
//!            ├─> file: verbatim text + stat
//!            └─> directory: sorted **/*.md, separators, size sum, newest mtime
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use content_source::{get_raw_content, ContentSourceConfig, SourceType};
//!
//! let config = ContentSourceConfig::new(SourceType::Directory, "docs");
//! let result = get_raw_content(&config)?;
//! println!("{} ({} files)", result.source_info, result.total_files);
//! # Ok::<(), content_source::ContentError>(())
//! ```

mod aggregator;
mod config;
mod error;
mod resolver;
mod scanner;
mod types;

pub use aggregator::{aggregate, get_raw_content};
pub use config::{
    ContentSourceConfig, ReadMode, SourceType, READ_MODE_ENV, SOURCE_PATH_ENV, SOURCE_TYPE_ENV,
};
pub use error::{ContentError, Result};
pub use resolver::{resolve, ResolvedSource};
pub use scanner::{MarkdownFile, MarkdownScanner, ScanOutcome};
pub use types::{format_timestamp, separator, Aggregation, SkippedFile};
