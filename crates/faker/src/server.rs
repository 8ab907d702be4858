//! MCP server handler exposing the faker tools.

use rmcp::{
    ErrorData,
    handler::server::ServerHandler,
    model::{
        CallToolRequestParams, CallToolResult, Content, ListToolsResult, PaginatedRequestParams,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
};
use tracing::debug;

use crate::tools;

pub const SERVER_NAME: &str = "faker";

/// Stateless tool server; each call draws from the thread-local RNG.
#[derive(Debug, Clone, Default)]
pub struct FakerServer;

impl FakerServer {
    pub fn new() -> Self {
        Self
    }

    fn generate(
        &self,
        request: CallToolRequestParams,
    ) -> Result<CallToolResult, ErrorData> {
        let mut rng = rand::thread_rng();
        match tools::call(&request.name, request.arguments, &mut rng) {
            Ok(text) => {
                debug!(tool = %request.name, bytes = text.len(), "generated records");
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            Err(e) => {
                debug!(tool = %request.name, error = %e, "tool call rejected");
                Err(e.into())
            }
        }
    }
}

impl ServerHandler for FakerServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info.name = SERVER_NAME.into();
        info.server_info.version = env!("CARGO_PKG_VERSION").into();
        info.instructions = Some("Generates realistic fake records for testing and prototyping.".into());
        info
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, ErrorData>> + Send + '_ {
        async move { Ok(ListToolsResult::with_all_items(tools::descriptors())) }
    }

    fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, ErrorData>> + Send + '_ {
        // ThreadRng is not Send, so generation finishes before the future is built.
        let result = self.generate(request);
        async move { result }
    }
}
