use std::sync::Arc;

use crate::types::{AppointmentRecord, FaqEntry};
use crate::Result;

/// Read side of the FAQ corpus.
///
/// `list_all` is a full scan. The order it yields is the order retrieval
/// breaks ties in, so implementations should not reshuffle between calls.
pub trait FaqStore: Send + Sync {
    fn list_all(&self) -> Result<Vec<FaqEntry>>;
}

/// Append-only sink for confirmed appointments. One call, one record.
pub trait AppointmentStore: Send + Sync {
    fn put(&self, record: &AppointmentRecord) -> Result<()>;
}

impl<T: FaqStore + ?Sized> FaqStore for Arc<T> {
    fn list_all(&self) -> Result<Vec<FaqEntry>> { (**self).list_all() }
}

impl<T: AppointmentStore + ?Sized> AppointmentStore for Arc<T> {
    fn put(&self, record: &AppointmentRecord) -> Result<()> { (**self).put(record) }
}
