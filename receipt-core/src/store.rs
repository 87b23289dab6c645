//! Score Storage
//!
//! Maps generated receipt identifiers to the points awarded at submission.
//! Records are insert-only and live as long as the store.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::error::{ReceiptError, ReceiptResult};
use crate::types::{ReceiptId, ScoreRecord};

/// Score storage interface
pub trait PointsStore: Send + Sync {
    /// Store points under a freshly generated identifier
    ///
    /// The identifier is distinct from every one issued before, and the
    /// record is visible to `lookup` once this returns.
    fn insert(&self, points: u64) -> ReceiptId;

    /// Look up the record for an identifier
    fn lookup(&self, id: &str) -> ReceiptResult<ScoreRecord>;

    /// Number of stored records
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory score store
///
/// Records are immutable once inserted, so a poisoned lock still guards a
/// consistent map and is recovered rather than propagated.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<ReceiptId, ScoreRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PointsStore for MemoryStore {
    fn insert(&self, points: u64) -> ReceiptId {
        let mut records = self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        loop {
            let id = ReceiptId::generate();
            match records.entry(id.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(ScoreRecord {
                        id: id.clone(),
                        points,
                    });
                    return id;
                }
                Entry::Occupied(_) => {
                    tracing::warn!(receipt_id = %id, "Receipt id collision, regenerating");
                }
            }
        }
    }

    fn lookup(&self, id: &str) -> ReceiptResult<ScoreRecord> {
        let records = self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        records
            .get(id)
            .cloned()
            .ok_or_else(|| ReceiptError::not_found(id))
    }

    fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
