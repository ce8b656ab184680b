//! CLI command definitions for the `linexplain` binary.
//!
//! Uses clap derive macros for argument parsing. Every server option can
//! also be set through its `LINEXPLAIN_*` environment variable.

pub mod history;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// The Linux Command Explainer: chat server and history tools.
#[derive(Parser)]
#[command(name = "linexplain", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also export spans to stdout through OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    /// SQLite database URL (defaults to ~/.linexplain/linexplain.db).
    #[arg(long, env = "LINEXPLAIN_DATABASE_URL", global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (chat API and static client).
    Serve {
        /// Host to bind to.
        #[arg(long, env = "LINEXPLAIN_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on.
        #[arg(short, long, env = "LINEXPLAIN_PORT", default_value = "8787")]
        port: u16,

        /// Directory holding index.html, chat.js and styles.css.
        #[arg(long, env = "LINEXPLAIN_WEB_DIR", default_value = "web")]
        web_dir: PathBuf,
    },

    /// Print the stored history of a session.
    History {
        /// Session identifier (as kept in the browser's localStorage).
        session_id: String,

        /// Output machine-readable JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Create or upgrade the database schema, then exit.
    Migrate,
}

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter(verbose: u8, quiet: bool) -> &'static str {
    match verbose {
        0 if quiet => "error",
        0 => "warn,linexplain_api=info,linexplain_core=info,linexplain_infra=info,tower_http=info",
        1 => "info,linexplain_api=debug,linexplain_core=debug,linexplain_infra=debug,tower_http=debug",
        _ => "trace",
    }
}
