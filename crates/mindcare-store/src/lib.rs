//! mindcare-store
//!
//! Concrete FAQ and appointment stores: in-memory for tests and embedding,
//! JSON-lines files for the command-line apps.
pub mod jsonl;
pub mod memory;

pub use jsonl::{JsonlAppointmentStore, JsonlFaqStore};
pub use memory::{MemoryAppointmentStore, MemoryFaqStore};
