//! MathCard MCP Server
//!
//! Line-delimited JSON-RPC over stdin/stdout. Every engine tool is exposed
//! under its registry name, plus `help` and `list_tools`.
//!
//! Logs go to stderr; stdout carries only protocol messages.

mod config;
mod server;

use config::HostConfig;
use mathcard::MathCard;
use server::{Server, PROTOCOL_VERSION, SERVER_VERSION};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn main() {
    init_logging();

    let config = HostConfig::from_env();
    let card = MathCard::with_standard_tools()
        .with_precision(config.precision)
        .with_samples(config.samples);
    let tool_count = card.registry().len();
    let server = Server::new(card);

    info!(
        version = SERVER_VERSION,
        protocol = PROTOCOL_VERSION,
        precision = config.precision,
        samples = config.samples,
        tools = tool_count,
        "MathCard MCP server started"
    );

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let Some(response) = server.handle_line(&line) else {
                    continue;
                };
                let response_json = match serde_json::to_string(&response) {
                    Ok(json) => json,
                    Err(e) => {
                        error!(error = %e, "failed to serialize response");
                        continue;
                    }
                };
                let mut stdout = io::stdout().lock();
                if let Err(e) = writeln!(stdout, "{}", response_json).and_then(|_| stdout.flush()) {
                    error!(error = %e, "failed to write response");
                    break;
                }
            }
            Err(e) => {
                error!(error = %e, "failed to read input");
                break;
            }
        }
    }

    info!("server shutting down");
}
