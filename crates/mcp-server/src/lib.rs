//! Content MCP Server
//!
//! Serves raw markdown to AI agents via the MCP protocol.
//!
//! ## Tools
//!
//! - `content_get_raw` - Return the configured file verbatim, or every `.md` file under the
//!   configured directory joined with `ARCHIVO` separators
//!
//! ## Configuration
//!
//! - `CONTENT_SOURCE_TYPE` - `file` or `directory` (default)
//! - `CONTENT_SOURCE_PATH` - file or directory to serve (required)
//! - `CONTENT_SOURCE_READ_MODE` - `best_effort` skips unreadable files instead of failing
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "content": {
//!       "command": "content-mcp",
//!       "env": {
//!         "CONTENT_SOURCE_TYPE": "directory",
//!         "CONTENT_SOURCE_PATH": "/path/to/docs"
//!       }
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

mod test_support;
pub mod tools;

pub use tools::ContentService;

pub async fn main_entry() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("Starting content MCP server (tool: content_get_raw)");

    let service = ContentService::new();
    let server = service.serve(stdio()).await?;

    // Wait for shutdown
    server.waiting().await?;

    log::info!("Content MCP server stopped");
    Ok(())
}
