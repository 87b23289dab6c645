//! Receipt processing and points lookup endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use receipt_core::{validate, PointsBreakdown, Receipt, ReceiptPayload};

use crate::dto::{PointsResponse, ProcessReceiptResponse};
use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::state::AppState;

/// Validate, score and store a receipt
pub async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<ReceiptPayload>, JsonRejection>,
) -> ApiResult<Json<ProcessReceiptResponse>> {
    let receipt = accept_receipt(payload).map_err(|e| {
        tracing::debug!(error = %e, "Receipt rejected");
        metrics::record_receipt_rejected();
        e
    })?;

    let breakdown = PointsBreakdown::for_receipt(&receipt);
    let points = breakdown.total();
    let receipt_id = state.store.insert(points);

    tracing::info!(receipt_id = %receipt_id, points, "Receipt processed");
    tracing::debug!(receipt_id = %receipt_id, ?breakdown, "Points breakdown");
    metrics::record_receipt_processed(points);

    Ok(Json(ProcessReceiptResponse {
        id: receipt_id.into(),
    }))
}

/// Get the points awarded to a receipt
pub async fn get_points(
    State(state): State<AppState>,
    Path(receipt_id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let record = state.store.lookup(&receipt_id).map_err(|e| {
        tracing::debug!(receipt_id = %receipt_id, "Unknown receipt id");
        ApiError::from(e)
    })?;

    Ok(Json(PointsResponse {
        points: record.points,
    }))
}

fn accept_receipt(payload: Result<Json<ReceiptPayload>, JsonRejection>) -> ApiResult<Receipt> {
    let Json(payload) = payload?;
    Ok(validate(payload)?)
}
