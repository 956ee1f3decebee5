//! pingreport - host reachability reports from the system ping utility.
//!
//! `pingreport <host>` prints one report; with no arguments the HTTP bridge
//! is started instead.

mod config;
mod ping;
mod web;

use config::ServerConfig;
use ping::PingRunner;
use web::Server;

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error + Send + Sync>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("pingreport=info".parse()?))
        .init();

    // Load configuration
    let cfg = ServerConfig::load();
    let runner = Arc::new(PingRunner::new(cfg.ping_bin.clone()));
    tracing::info!("Using ping utility {}", runner.program());

    // One-shot mode
    if let Some(host) = std::env::args().nth(1) {
        return match ping::ping(&host, &runner).await {
            Ok(report) => {
                write_report(std::io::stdout().lock(), &report)?;
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                eprintln!("Ping Error: {}", e);
                Ok(ExitCode::FAILURE)
            }
        };
    }

    tracing::info!("Starting pingreport on port {}...", cfg.http_port);
    let server = Server::new(cfg, runner);
    server.start().await?;

    Ok(ExitCode::SUCCESS)
}

/// Write the report exactly as built; it carries its own line breaks.
fn write_report(mut out: impl Write, report: &str) -> std::io::Result<()> {
    out.write_all(report.as_bytes())?;
    out.flush()
}
