//! Connect to a tool server, list its tools and call one.
//!
//! Run with: cargo run --example list_tools -- target/debug/faker-server

use runtime::{McpToolHost, ServerLaunch, ToolCall, ToolHost};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: list_tools <path_to_server_script>");
        return Ok(());
    };

    let launch = ServerLaunch::from_script(&path)?;
    println!("Spawning MCP server: {launch}");
    let host = McpToolHost::connect(&launch).await?;

    println!("\nDiscovered {} tools:", host.specs().len());
    for spec in host.specs() {
        println!("  - {}", spec.name);
        println!("    {}", spec.description);
    }

    if let Some(first) = host.specs().first() {
        let call = ToolCall {
            id: "example".to_string(),
            name: first.name.clone(),
            input: serde_json::json!({ "count": 2 }),
        };
        println!("\nCalling {}...", call.name);
        match host.execute(&call).await {
            Ok(text) => println!("{text}"),
            Err(e) => println!("Error: {e}"),
        }
    }

    host.close().await;
    Ok(())
}
