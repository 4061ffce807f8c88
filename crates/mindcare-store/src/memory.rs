use std::sync::Mutex;

use mindcare_core::traits::{AppointmentStore, FaqStore};
use mindcare_core::types::{AppointmentRecord, FaqEntry};
use mindcare_core::{Error, Result};

/// Fixed corpus held in memory. Iteration order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryFaqStore {
    entries: Vec<FaqEntry>,
}

impl MemoryFaqStore {
    pub fn new(entries: Vec<FaqEntry>) -> Self { Self { entries } }

    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self::new(pairs.into_iter().map(|(q, a)| FaqEntry::new(q, a)).collect())
    }
}

impl FaqStore for MemoryFaqStore {
    fn list_all(&self) -> Result<Vec<FaqEntry>> { Ok(self.entries.clone()) }
}

#[derive(Debug, Default)]
pub struct MemoryAppointmentStore {
    records: Mutex<Vec<AppointmentRecord>>,
}

impl MemoryAppointmentStore {
    pub fn new() -> Self { Self::default() }

    /// Snapshot of everything written so far, in write order.
    pub fn records(&self) -> Vec<AppointmentRecord> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl AppointmentStore for MemoryAppointmentStore {
    fn put(&self, record: &AppointmentRecord) -> Result<()> {
        self.records
            .lock()
            .map_err(|_| Error::Store("appointment store lock poisoned".to_string()))?
            .push(record.clone());
        Ok(())
    }
}
