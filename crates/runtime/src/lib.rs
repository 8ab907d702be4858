//! Orchestration runtime for the MCP chat client.
//!
//! This crate connects a hosted language model to an MCP tool server running
//! as a child process and drives the per-query request/response loop.
//!
//! # Overview
//!
//! - **ServerLaunch**: resolves how to start a tool server from its path.
//! - **McpToolHost**: owns the tool server process and exposes its tools
//!   through the [`ToolHost`] trait.
//! - **Backend**: a trait abstracting the hosted model ([`AnthropicBackend`]).
//! - **Orchestrator**: sends a query to the model, runs any requested tool
//!   calls and returns the final text.
//!
//! # Example
//!
//! ```ignore
//! use runtime::{AnthropicAuth, AnthropicBackend, McpToolHost, Orchestrator, ServerLaunch};
//!
//! # async fn example() -> runtime::Result<()> {
//! let launch = ServerLaunch::from_script("target/release/faker-server")?;
//! let tools = McpToolHost::connect(&launch).await?;
//! let backend =
//!     AnthropicBackend::builder(AnthropicAuth::api_key("sk-ant-api01-..."), "claude-3-5-sonnet-20241022")
//!         .build();
//!
//! let orchestrator = Orchestrator::new(backend, tools);
//! let answer = orchestrator.process_query("a play about a brave turtle").await?;
//! println!("{answer}");
//! orchestrator.into_tools().close().await;
//! # Ok(())
//! # }
//! ```

mod error;
pub mod launch;
mod mcp;
pub mod model;
mod orchestrator;
pub mod prompt;
pub mod providers;
pub mod tools;

pub use error::{Error, Result};
pub use launch::{LaunchError, Platform, ServerLaunch};
pub use mcp::McpClient;
pub use model::{Backend, Message, ModelError, ModelRequest, ModelResponse, Part, Role, ToolCall, ToolSpec};
pub use orchestrator::Orchestrator;
pub use prompt::QueryConfig;
pub use providers::{AnthropicAuth, AnthropicBackend};
pub use tools::{McpToolHost, ToolError, ToolHost};
