use uuid::Uuid;

use mindcare_core::traits::AppointmentStore;
use mindcare_core::types::{AppointmentRecord, Slots};
use mindcare_core::Result;

pub const REFERENCE_PREFIX: &str = "REF-";
pub const REFERENCE_LEN: usize = 8;

pub const NAME_SLOT: &str = "Name";
pub const DATE_SLOT: &str = "Date";
pub const TIME_SLOT: &str = "Time";
pub const DEPARTMENT_SLOT: &str = "Department";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    Confirmed(AppointmentRecord),
    /// At least one required slot was absent or unfilled. Nothing was written.
    MissingDetails,
}

/// `REF-` followed by the first eight hex digits of a v4 UUID, uppercased.
/// Collisions are unlikely, not impossible.
pub fn generate_reference() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{}{}", REFERENCE_PREFIX, id[..REFERENCE_LEN].to_ascii_uppercase())
}

fn filled<'a>(slots: &'a Slots, name: &str) -> Option<&'a str> {
    slots.get(name).and_then(|v| v.as_deref())
}

pub struct BookingHandler<A> {
    store: A,
}

impl<A: AppointmentStore> BookingHandler<A> {
    pub fn new(store: A) -> Self { Self { store } }

    /// Writes exactly one record per call. Resubmitting the same slots books
    /// again under a new reference.
    pub fn book(&self, slots: &Slots) -> Result<BookingOutcome> {
        let (Some(name), Some(date), Some(time), Some(department)) = (
            filled(slots, NAME_SLOT),
            filled(slots, DATE_SLOT),
            filled(slots, TIME_SLOT),
            filled(slots, DEPARTMENT_SLOT),
        ) else {
            tracing::debug!(provided = slots.len(), "booking slots incomplete");
            return Ok(BookingOutcome::MissingDetails);
        };

        let record = AppointmentRecord::confirmed(generate_reference(), name, date, time, department);
        self.store.put(&record)?;
        tracing::info!(reference = %record.reference, department = %record.department, "appointment booked");
        Ok(BookingOutcome::Confirmed(record))
    }
}
