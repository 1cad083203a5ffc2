use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::ContactRecord;

/// Volatile, process-lifetime store of accepted submissions.
///
/// A cheap clonable handle over a shared ordered list. Records are only ever
/// appended; there is no update, delete, or capacity bound, and everything
/// is lost on restart. Each instance owns an isolated list, so tests can
/// construct a fresh store per run instead of sharing a global.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    records: Arc<RwLock<Vec<ContactRecord>>>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock only means a panic elsewhere mid-read; an append can
    // never leave the Vec half-written, so the data is still usable.
    fn read(&self) -> RwLockReadGuard<'_, Vec<ContactRecord>> {
        self.records.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<ContactRecord>> {
        self.records.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Append one accepted record. The single side effect of an in-memory
    /// submission.
    pub fn append(&self, record: ContactRecord) {
        self.write().push(record);
    }

    /// Snapshot of the full list, in insertion order.
    pub fn list(&self) -> Vec<ContactRecord> {
        self.read().clone()
    }

    pub fn count(&self) -> usize {
        self.read().len()
    }
}
