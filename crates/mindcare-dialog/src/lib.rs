//! mindcare-dialog
//!
//! Turn handling for the assistant: decode the front-end's event, route by
//! intent to booking or FAQ retrieval, and close the turn with exactly one
//! plain-text message.
pub mod booking;
pub mod event;
pub mod response;
pub mod router;

pub use booking::{generate_reference, BookingHandler, BookingOutcome};
pub use event::decode_turn;
pub use response::{CloseEnvelope, DialogResponse};
pub use router::{DialogRouter, Route};
