//! MCP Tools for Content MCP
//!
//! Exposes the configured markdown source to AI agents via MCP protocol.

use content_source::{get_raw_content, Aggregation, ContentSourceConfig};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

/// Content MCP Service
#[derive(Clone)]
pub struct ContentService {
    /// Pinned configuration; `None` re-reads the environment on every call
    config: Option<ContentSourceConfig>,
    /// Tool router
    tool_router: ToolRouter<Self>,
}

impl ContentService {
    pub fn new() -> Self {
        Self {
            config: None,
            tool_router: Self::tool_router(),
        }
    }

    pub fn with_config(config: ContentSourceConfig) -> Self {
        Self {
            config: Some(config),
            tool_router: Self::tool_router(),
        }
    }

    fn current_config(&self) -> ContentSourceConfig {
        self.config
            .clone()
            .unwrap_or_else(ContentSourceConfig::from_env)
    }
}

impl Default for ContentService {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for ContentService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some("Content MCP serves raw markdown. Call 'content_get_raw' to get the configured file, or all .md files of the configured directory combined with separators.".into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

// ============================================================================
// Tool Input Schemas
// ============================================================================

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ContentGetRawRequest {
    /// Accepted for discoverability only
    #[schemars(
        description = "Not used - content source is determined by CONTENT_SOURCE_TYPE and CONTENT_SOURCE_PATH environment variables"
    )]
    pub file_path: Option<String>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl ContentService {
    /// Get raw markdown content
    #[tool(description = "Get raw markdown content without any processing. If source is a file, returns that file. If source is a directory, combines ALL .md files into one content with separators")]
    pub async fn content_get_raw(
        &self,
        Parameters(request): Parameters<ContentGetRawRequest>,
    ) -> Result<CallToolResult, McpError> {
        if let Some(file_path) = request.file_path.as_deref() {
            log::debug!("Ignoring file_path={file_path:?}; the source comes from configuration");
        }

        let config = self.current_config();
        Ok(render(compute_content_get_raw(config).await))
    }
}

/// Filesystem work runs off the async runtime.
async fn compute_content_get_raw(config: ContentSourceConfig) -> Result<Aggregation, String> {
    match tokio::task::spawn_blocking(move || get_raw_content(&config)).await {
        Ok(Ok(aggregation)) => Ok(aggregation),
        Ok(Err(err)) => {
            log::warn!("content_get_raw failed ({}): {err}", err.category());
            Err(err.to_string())
        }
        Err(err) => {
            log::error!("content_get_raw task failed: {err}");
            Err(format!("Failed to get raw content: {err}"))
        }
    }
}

fn render(result: Result<Aggregation, String>) -> CallToolResult {
    match result {
        Ok(aggregation) => render_json(&aggregation),
        Err(message) => error_result(&message),
    }
}

fn render_json<T: Serialize>(value: &T) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(err) => {
            log::error!("content_get_raw result serialization failed: {err}");
            error_result(&format!("Failed to serialize result: {err}"))
        }
    }
}

fn error_result(message: &str) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {message}"))])
}
