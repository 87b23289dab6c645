//! Receipt Core
//!
//! Validation, scoring and storage for the receipt points service.
//!
//! ```text
//! payload ──► validation ──► points ──► store.insert ──► ReceiptId
//!                                          ▲
//! ReceiptId ───────────────────────► store.lookup ──► ScoreRecord
//! ```
//!
//! Everything here is synchronous; the HTTP layer lives in `receipt-api`.

pub mod error;
pub mod points;
pub mod store;
pub mod types;
pub mod validation;

pub use error::{ReceiptError, ReceiptResult};
pub use points::{compute_points, PointsBreakdown};
pub use store::{MemoryStore, PointsStore};
pub use types::*;
pub use validation::{parse_payload, validate, validate_json};
