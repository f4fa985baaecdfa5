use std::net::IpAddr;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use todo_server::{config::DEFAULT_PORT, logging, AppState, ServerConfig};

#[derive(Parser)]
#[command(name = "todo-server")]
#[command(version)]
#[command(about = "In-memory todo CRUD service", long_about = None)]
struct Cli {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level, cli.json_logs)?;

    let config = ServerConfig::new(cli.host, cli.port);
    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    let state = AppState::seeded().await;
    todo_server::run(listener, state).await?;
    Ok(())
}
