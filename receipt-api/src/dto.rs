//! Data Transfer Objects for API responses
//!
//! The request body is `receipt_core::ReceiptPayload`.

use serde::Serialize;

/// Process receipt response
#[derive(Debug, Serialize)]
pub struct ProcessReceiptResponse {
    pub id: String,
}

/// Points lookup response
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub receipts_stored: usize,
}
