//! Convertix MCP Server
//!
//! MCP Server, protocol revision 2025-11-25, over newline-delimited stdio.
//!
//! Tools:
//! - convert: Convert a value between two units
//! - convert_all: Convert a value into every unit of its category
//! - list_categories / list_units: Browse the unit catalog
//! - ohms_law: Solve V, I, R and P from any two of V, I, R
//! - call: Invoke any registered function
//! - help / list_functions: Function documentation

mod config;
mod server;

use std::io;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::ServerConfig;
use server::{Server, PROTOCOL_VERSION, SERVER_VERSION};

/// Logs go to stderr; stdout carries the protocol
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> io::Result<()> {
    init_logging();

    let config = ServerConfig::from_env();
    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, decimals = config.decimals, "Convertix MCP server started");

    let server = Server::new(config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(response) = server.handle_line(line) else {
            continue;
        };

        let payload = match serde_json::to_string(&response) {
            Ok(p) => p,
            Err(e) => {
                error!("failed to serialize response: {}", e);
                continue;
            }
        };

        stdout.write_all(payload.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    info!("client disconnected (EOF), shutting down");
    Ok(())
}
