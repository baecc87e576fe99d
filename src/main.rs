//! touchmcp - stdio entry point

use anyhow::Result;
use touchmcp::server::{Server, ServerConfig};
use touchmcp::telemetry;
use touchmcp::tools::ToolRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_logging()?;

    let server = Server::new(ServerConfig::default(), ToolRegistry::new());

    tracing::info!(
        name = %server.config().name,
        version = %server.config().version,
        tools = server.registry().len(),
        "starting"
    );

    server.serve_stdio().await?;

    Ok(())
}
