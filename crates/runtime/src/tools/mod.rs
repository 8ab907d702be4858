//! Tool execution and MCP integration.

pub mod errors;
mod mcp_host;
mod r#trait;

pub use errors::ToolError;
pub use mcp_host::McpToolHost;
pub use r#trait::ToolHost;
