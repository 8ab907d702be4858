//! MCP (Model Context Protocol) client integration.
//!
//! This module provides tool-server management using the official rmcp SDK.
//!
//! # Example
//!
//! ```ignore
//! use runtime::{McpClient, ServerLaunch};
//!
//! # async fn example() -> runtime::Result<()> {
//! let launch = ServerLaunch::from_script("target/release/faker-server")?;
//! let client = McpClient::spawn(&launch).await?;
//!
//! for tool in client.list_tools().await? {
//!     println!("Tool: {}", tool.name);
//! }
//! client.shutdown().await;
//! # Ok(())
//! # }
//! ```

use rmcp::{
    ServiceExt,
    model::{CallToolRequestParams, CallToolResult, Tool},
    service::{RoleClient, RunningService, ServiceError},
    transport::{ConfigureCommandExt, TokioChildProcess},
};
use serde_json::{Map, Value};
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::launch::ServerLaunch;
use crate::{Error, Result};

/// An MCP client connected to a server process.
pub struct McpClient {
    service: RunningService<RoleClient, ()>,
    pid: Option<u32>,
}

impl McpClient {
    /// Spawn the server process and complete the MCP handshake.
    pub async fn spawn(launch: &ServerLaunch) -> Result<Self> {
        debug!(command = %launch, "spawning MCP server");

        let transport = TokioChildProcess::new(Command::new(&launch.program).configure(|cmd| {
            cmd.args(&launch.args).kill_on_drop(true);
        }))
        .map_err(|e| Error::Connection(format!("failed to start `{launch}`: {e}")))?;
        let pid = transport.id();

        let service = ()
            .serve(transport)
            .await
            .map_err(|e| Error::Connection(format!("handshake with `{launch}` failed: {e}")))?;

        if let Some(info) = service.peer_info() {
            info!(
                pid = ?pid,
                server = %info.server_info.name,
                version = %info.server_info.version,
                "connected to MCP server"
            );
        }

        Ok(Self { service, pid })
    }

    /// OS process id of the server, while it is running.
    pub fn pid(&self) -> Option<u32> {
        self.pid
    }

    /// List every tool the server exposes, following pagination.
    pub async fn list_tools(&self) -> Result<Vec<Tool>> {
        self.service
            .list_all_tools()
            .await
            .map_err(|e| Error::Connection(format!("failed to list tools: {e}")))
    }

    /// Call a tool with the given name and arguments.
    pub async fn call_tool(
        &self,
        name: impl Into<String>,
        arguments: Option<Map<String, Value>>,
    ) -> std::result::Result<CallToolResult, ServiceError> {
        let params = CallToolRequestParams {
            name: name.into().into(),
            arguments,
            meta: None,
            task: None,
        };

        self.service.call_tool(params).await
    }

    /// Close the transport and wait for the server task to wind down.
    pub async fn shutdown(self) {
        match self.service.cancel().await {
            Ok(reason) => debug!(?reason, "MCP client closed"),
            Err(e) => warn!(error = %e, "MCP client did not shut down cleanly"),
        }
    }
}
