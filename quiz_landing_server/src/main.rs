//! # quiz-landing
//!
//! Serve the newquiz.online landing page, or export it as static HTML.
//!
//! ```bash
//! # Session-aware server (reads ./quiz-landing.toml when present)
//! quiz-landing serve --bind 0.0.0.0:8080
//!
//! # Static snapshots: index.html + index.authenticated.html
//! quiz-landing export --out dist/
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use quiz_landing_server::{AppState, ServerConfig, create_router, export_static};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "quiz-landing")]
#[command(about = "Serve or export the newquiz.online landing page")]
#[command(version)]
struct Cli {
    /// Config file (default: ./quiz-landing.toml if it exists)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        long,
        default_value = "info",
        global = true,
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server
    Serve {
        /// Listen address, overrides the config file
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },
    /// Write static pages for both session states
    Export {
        /// Output directory
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,
    },
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    let mut config = ServerConfig::resolve(cli.config.as_deref()).context("loading config")?;

    match cli.command {
        Command::Serve { bind } => {
            if let Some(bind) = bind {
                config.bind = bind;
            }
            serve(config).await
        }
        Command::Export { out } => {
            let written = export_static(&out, &config.logo)
                .with_context(|| format!("exporting to {}", out.display()))?;
            info!(files = written.len(), "export finished");
            Ok(())
        }
    }
}

async fn serve(config: ServerConfig) -> Result<()> {
    let bind = config.bind;
    info!("Starting quiz-landing v{}", env!("CARGO_PKG_VERSION"));
    info!(
        session_cookie = %config.session.cookie,
        session_detection = config.session.enabled,
        "session settings"
    );

    let app = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("binding {bind}"))?;
    info!("Listening on http://{}", bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_accepts_known_levels() {
        let cli = Cli::try_parse_from(["quiz-landing", "--log-level", "debug", "export"]).unwrap();
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn log_level_rejects_typos() {
        let err = Cli::try_parse_from(["quiz-landing", "--log-level", "verbos", "serve"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}
