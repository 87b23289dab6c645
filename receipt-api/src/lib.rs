//! Receipt API Server
//!
//! REST API for scoring receipts and looking up awarded points.
//!
//! ## Endpoints
//!
//! - POST /receipts/process - Submit a receipt, returns `{"id": ...}`
//! - GET /receipts/:id/points - Points for a processed receipt, returns `{"points": ...}`
//! - GET /health - Service health
//!
//! Invalid receipts get `400` and unknown ids `404`, both with an
//! `{"error", "code"}` body.

pub mod dto;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod routes;
pub mod server;
pub mod state;

pub use dto::*;
pub use error::*;
pub use logging::{init_logging, LogConfig, LogFormat, LogLevel};
pub use crate::metrics::{init_metrics, MetricsConfig};
pub use routes::*;
pub use server::*;
pub use state::*;
