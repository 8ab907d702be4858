//! MCP-backed tool host.

use rmcp::model::{CallToolResult, Tool};
use rmcp::service::ServiceError;
use serde_json::{Map, Value};
use tracing::{debug, info};

use super::{ToolError, ToolHost};
use crate::launch::ServerLaunch;
use crate::mcp::McpClient;
use crate::model::{ToolCall, ToolSpec};
use crate::Result;

impl From<Tool> for ToolSpec {
    fn from(tool: Tool) -> Self {
        Self {
            name: tool.name.into_owned(),
            description: tool
                .description
                .map(|d| d.into_owned())
                .unwrap_or_default(),
            schema: Value::Object(tool.input_schema.as_ref().clone()),
        }
    }
}

/// Tool host backed by an MCP server child process.
///
/// The host exclusively owns the process: it is started by [`connect`] and
/// torn down by [`close`] (or killed when the host is dropped).
///
/// [`connect`]: McpToolHost::connect
/// [`close`]: McpToolHost::close
pub struct McpToolHost {
    client: McpClient,
    specs: Vec<ToolSpec>,
}

impl McpToolHost {
    /// Spawn the server, run the handshake and cache its tool specs.
    pub async fn connect(launch: &ServerLaunch) -> Result<Self> {
        let client = McpClient::spawn(launch).await?;
        let specs: Vec<ToolSpec> = client
            .list_tools()
            .await?
            .into_iter()
            .map(ToolSpec::from)
            .collect();
        info!(tools = specs.len(), "discovered MCP tools");
        Ok(Self { client, specs })
    }

    /// Names of the advertised tools, in server order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.specs.iter().map(|s| s.name.as_str()).collect()
    }

    /// OS process id of the server child.
    pub fn server_pid(&self) -> Option<u32> {
        self.client.pid()
    }

    /// Shut the server down.
    pub async fn close(self) {
        self.client.shutdown().await;
    }
}

impl ToolHost for McpToolHost {
    fn specs(&self) -> &[ToolSpec] {
        &self.specs
    }

    async fn execute(&self, call: &ToolCall) -> std::result::Result<String, ToolError> {
        if !self.specs.iter().any(|s| s.name == call.name) {
            return Err(ToolError::NotFound(call.name.clone()));
        }

        let arguments = tool_arguments(&call.input)?;
        debug!(tool = %call.name, ?arguments, "calling MCP tool");

        let result = self
            .client
            .call_tool(&call.name, arguments)
            .await
            .map_err(|e| match e {
                ServiceError::TransportClosed => ToolError::Transport(e.to_string()),
                other => ToolError::Execution(other.to_string()),
            })?;

        let text = result_text(&result);
        if result.is_error.unwrap_or(false) {
            return Err(ToolError::Execution(text));
        }
        Ok(text)
    }
}

/// Model tool input must be a JSON object (or absent).
fn tool_arguments(input: &Value) -> std::result::Result<Option<Map<String, Value>>, ToolError> {
    match input {
        Value::Object(map) => Ok(Some(map.clone())),
        Value::Null => Ok(None),
        other => Err(ToolError::InvalidInput(format!(
            "tool arguments must be a JSON object, got {other}"
        ))),
    }
}

fn result_text(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|c| c.as_text())
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
