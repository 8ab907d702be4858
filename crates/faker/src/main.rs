use faker::FakerServer;
use rmcp::{ServiceExt, transport::stdio};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Default filter: this crate at info, the MCP SDK at warn.
const DEFAULT_LOG_FILTER: &str = "faker=info,faker_server=info,rmcp=warn";

#[tokio::main]
async fn main() {
    // stdout carries the protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "fatal error running server");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let service = FakerServer::new().serve(stdio()).await?;
    info!("Faker MCP Server running on stdio");
    let reason = service.waiting().await?;
    info!(?reason, "Faker MCP Server stopped");
    Ok(())
}
