//! Receipt Points Command Line Interface
//!
//! Configuration is loaded from environment variables (via .env file).
//! Command-line arguments override environment variables.
//!
//! Usage:
//!   receipts serve          - Start the receipt API server
//!   receipts score <file>   - Score a receipt JSON document ("-" for stdin)

use clap::{Parser, Subcommand};
use receipt_api::{ApiConfig, LogConfig, LogFormat, LogLevel, MetricsConfig};
use std::path::PathBuf;

mod commands;
mod error;

use error::CliResult;

#[derive(Parser)]
#[command(name = "receipts")]
#[command(about = "Receipt points service")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the receipt API server
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long, env = "RECEIPTS_HOST", default_value = "0.0.0.0")]
        host: String,
        /// Port to listen on
        #[arg(short, long, env = "RECEIPTS_PORT", default_value = "8080")]
        port: u16,
        /// Allow cross-origin requests
        #[arg(long, env = "RECEIPTS_ENABLE_CORS", default_value = "true", action = clap::ArgAction::Set)]
        cors: bool,
        /// Max request body size in bytes
        #[arg(long, env = "RECEIPTS_MAX_BODY_BYTES", default_value = "1048576")]
        max_body_bytes: usize,
        /// Per-request timeout in seconds
        #[arg(long, env = "RECEIPTS_REQUEST_TIMEOUT_SECS", default_value = "30")]
        request_timeout_secs: u64,
        /// Log level (trace, debug, info, warn, error)
        #[arg(long, env = "RECEIPTS_LOG_LEVEL", default_value = "info")]
        log_level: LogLevel,
        /// Log format (pretty, json, compact)
        #[arg(long, env = "RECEIPTS_LOG_FORMAT", default_value = "pretty")]
        log_format: LogFormat,
        /// Export Prometheus metrics
        #[arg(long, env = "RECEIPTS_METRICS_ENABLED")]
        metrics: bool,
        /// Prometheus scrape port
        #[arg(long, env = "RECEIPTS_METRICS_PORT", default_value = "9090")]
        metrics_port: u16,
    },

    /// Score a receipt JSON document offline
    Score {
        /// Receipt file, or "-" for stdin
        file: PathBuf,
        /// Print the per-rule breakdown as JSON
        #[arg(short, long)]
        explain: bool,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (ignore if not found)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run_command(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Serve {
            host,
            port,
            cors,
            max_body_bytes,
            request_timeout_secs,
            log_level,
            log_format,
            metrics,
            metrics_port,
        } => {
            let config = ApiConfig {
                host,
                port,
                enable_cors: cors,
                max_body_size: max_body_bytes,
                request_timeout_secs,
            };
            let log_config = LogConfig {
                level: log_level,
                format: log_format,
            };
            let metrics_config = MetricsConfig {
                enabled: metrics,
                port: metrics_port,
            };

            commands::handle_serve_command(config, log_config, metrics_config).await
        }

        Commands::Score { file, explain } => commands::handle_score_command(&file, explain),
    }
}
