use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    content_mcp::main_entry().await
}
