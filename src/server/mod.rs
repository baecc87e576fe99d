//! Hosting process for registered tools
//!
//! The server owns the advertised identity and the tool lookup table,
//! routes decoded requests (`router`), and speaks newline-delimited
//! JSON-RPC over stdio (`stdio`). It is constructed explicitly and passed
//! around; there is no process-global server state.

pub mod router;
pub mod stdio;

use crate::errors::Result;
use crate::protocol::mcp::ServerInfo;
use crate::tools::ToolRegistry;

/// Identity advertised during the `initialize` handshake
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "touch-mcp-server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// The tool-hosting server
pub struct Server {
    config: ServerConfig,
    registry: ToolRegistry,
}

impl Server {
    /// Create a server from an identity and a populated registry
    pub fn new(config: ServerConfig, registry: ToolRegistry) -> Self {
        Self { config, registry }
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get tool registry
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Identity in wire form
    pub fn server_info(&self) -> ServerInfo {
        ServerInfo {
            name: self.config.name.clone(),
            version: self.config.version.clone(),
        }
    }

    /// Serve requests from stdin to stdout until stdin closes
    pub async fn serve_stdio(&self) -> Result<()> {
        stdio::serve_stdio(self).await
    }
}
