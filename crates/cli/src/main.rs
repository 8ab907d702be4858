mod config;
mod error;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use runtime::{Backend, McpToolHost, Orchestrator, ServerLaunch, ToolHost};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;
use error::{Error, Result};

#[derive(Parser)]
#[command(name = "mcp-client")]
#[command(about = "Chat with a hosted model that can call tools on an MCP server", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the tool server (.js, .py, or an executable)
    server_script: Option<PathBuf>,

    /// Config file (defaults to ./mcp-client.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Model to use, overriding config and environment
    #[arg(long)]
    model: Option<String>,

    /// Maximum tokens per model call
    #[arg(long)]
    max_tokens: Option<u32>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(script) = cli.server_script.clone() else {
        println!("Usage: mcp-client <path_to_server_script>");
        return;
    };

    if let Err(e) = run(&cli, &script).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::discover(cli.config.as_deref())?;
    config.apply_env(|name| std::env::var(name).ok());
    if let Some(model) = &cli.model {
        config.backend.model = model.clone();
    }
    if let Some(max_tokens) = cli.max_tokens {
        config.backend.max_tokens = max_tokens;
    }
    Ok(config)
}

async fn run(cli: &Cli, script: &Path) -> Result<()> {
    let config = load_config(cli)?;
    // Credentials are checked before any process is spawned.
    let backend = config.backend()?;
    info!(model = %config.backend.model, "using hosted model");

    let launch = resolve_launch(script)?;
    let tools = McpToolHost::connect(&launch).await.inspect_err(|e| {
        warn!(server = %launch, error = %e, "failed to connect to MCP server");
    })?;
    println!(
        "\nConnected to server with tools: {:?}",
        tools.tool_names()
    );

    let orchestrator = Orchestrator::new(backend, tools);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let outcome = chat_loop(&orchestrator, stdin.lock(), &mut stdout).await;

    orchestrator.into_tools().close().await;
    outcome
}

/// Turn the server path into a launch command, logging failures like
/// connection errors.
fn resolve_launch(script: &Path) -> Result<ServerLaunch> {
    ServerLaunch::from_script(script).map_err(|e| {
        warn!(server = %script.display(), error = %e, "cannot launch MCP server");
        Error::Launch(e)
    })
}

/// Read queries until `quit` or end of input, printing each answer.
///
/// Query failures are printed and the loop continues, except when the tool
/// server has gone away.
async fn chat_loop<B, T, R, W>(
    orchestrator: &Orchestrator<B, T>,
    mut input: R,
    output: &mut W,
) -> Result<()>
where
    B: Backend,
    T: ToolHost,
    R: BufRead,
    W: Write,
{
    writeln!(output, "\nMCP Client Started!")?;
    writeln!(output, "Type your queries or 'quit' to exit.")?;

    loop {
        write!(output, "\nQuery: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF
            break;
        }

        let query = line.trim();
        if query.eq_ignore_ascii_case("quit") {
            break;
        }
        if query.is_empty() {
            continue;
        }

        debug!(query, "processing query");
        match orchestrator.process_query(query).await {
            Ok(response) => writeln!(output, "\n{response}")?,
            Err(e @ runtime::Error::Transport(_)) => return Err(Error::Runtime(e)),
            Err(e) => writeln!(output, "\nError: {e}")?,
        }
    }

    Ok(())
}
