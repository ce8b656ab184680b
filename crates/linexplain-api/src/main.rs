//! The Linux Command Explainer: HTTP server and CLI entry point.
//!
//! Binary name: `linexplain`
//!
//! Parses CLI arguments, initializes tracing and the database, then either
//! starts the HTTP server or runs a one-shot command.

mod cli;
mod config;
mod http;
mod state;

use clap::Parser;

use linexplain_observe::tracing_setup::{init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use config::ServiceConfig;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.otel, cli::default_log_filter(cli.verbose, cli.quiet))
        .map_err(|e| anyhow::anyhow!(e))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let database_url = cli.database_url.as_deref();

    match cli.command {
        Commands::Serve {
            host,
            port,
            web_dir,
        } => {
            let config = ServiceConfig::from_env()?;
            let state = AppState::init(database_url, config).await?;
            let db_pool = state.db_pool.clone();

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            if !cli.quiet {
                println!(
                    "  {} The Linux Command Explainer listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }
            tracing::info!(%addr, web_dir = %web_dir.display(), "Server started");

            let router = http::router::build_router(state, &web_dir);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            db_pool.close().await;
            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }

        Commands::History { session_id, json } => {
            let db_pool = state::open_database(database_url).await?;
            cli::history::show_history(db_pool, &session_id, json).await?;
        }

        Commands::Migrate => {
            let db_pool = state::open_database(database_url).await?;
            db_pool.close().await;
            if !cli.quiet {
                println!(
                    "  {} Database schema is up to date.",
                    console::style("✓").green()
                );
            }
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
