//! Command handlers

use receipt_api::{init_logging, init_metrics, run_server, ApiConfig, LogConfig, MetricsConfig};
use receipt_core::{validate_json, PointsBreakdown};
use serde_json::json;
use std::io::Read;
use std::path::Path;

use crate::error::{CliError, CliResult};

/// Start the HTTP service and block until shutdown
pub async fn handle_serve_command(
    config: ApiConfig,
    log_config: LogConfig,
    metrics_config: MetricsConfig,
) -> CliResult<()> {
    init_logging(&log_config).map_err(|e| CliError::config(format!("logging: {}", e)))?;
    init_metrics(&metrics_config).map_err(|e| CliError::config(format!("metrics: {}", e)))?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        cors = config.enable_cors,
        "Starting receipt API server"
    );

    run_server(config)
        .await
        .map_err(|e| CliError::server(e.to_string()))
}

/// Score a receipt document without starting the service
pub fn handle_score_command(file: &Path, explain: bool) -> CliResult<()> {
    let body = read_input(file)?;
    let output = score_document(&body, explain)?;
    println!("{}", output);
    Ok(())
}

/// Validate and score a JSON receipt, rendering the result
pub fn score_document(body: &[u8], explain: bool) -> CliResult<String> {
    let receipt = validate_json(body)?;
    let breakdown = PointsBreakdown::for_receipt(&receipt);

    if explain {
        let report = json!({
            "points": breakdown.total(),
            "breakdown": breakdown,
        });
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(breakdown.total().to_string())
    }
}

fn read_input(file: &Path) -> CliResult<Vec<u8>> {
    if file == Path::new("-") {
        let mut body = Vec::new();
        std::io::stdin().read_to_end(&mut body)?;
        Ok(body)
    } else {
        Ok(std::fs::read(file)?)
    }
}
