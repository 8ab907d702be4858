//! Fake-data MCP tool server.
//!
//! Exposes seven `generate_*` tools over MCP. Each tool takes a `count`
//! between 1 and 100 and returns a JSON array of records; `generate_custom`
//! additionally takes a `type` tag and returns scalars.
//!
//! # Example
//!
//! ```no_run
//! use faker::FakerServer;
//! use rmcp::ServiceExt;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let running = FakerServer::new().serve(rmcp::transport::stdio()).await?;
//! running.waiting().await?;
//! # Ok(())
//! # }
//! ```

mod args;
mod custom;
mod data;
mod error;
pub mod generators;
mod server;
pub mod tools;

pub use args::Count;
pub use custom::CustomKind;
pub use error::{Error, Result};
pub use server::{FakerServer, SERVER_NAME};
pub use tools::ToolKind;
