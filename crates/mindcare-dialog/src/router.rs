use serde_json::Value;

use mindcare_core::traits::{AppointmentStore, FaqStore};
use mindcare_core::types::TurnRequest;
use mindcare_core::Error;
use mindcare_text::{FaqRetriever, RetrievalOutcome};

use crate::booking::{BookingHandler, BookingOutcome};
use crate::event::decode_turn;
use crate::response::DialogResponse;

pub const BOOK_APPOINTMENT: &str = "BookAppointment";
pub const GET_SYMPTOM_INFO: &str = "GetSymptomInfo";
pub const FALLBACK_INTENT: &str = "FallbackIntent";

pub const UNRECOGNIZED: &str = "Sorry, I didn't understand that request.";
pub const MISSING_DETAILS: &str = "I missed some details. Please try booking again.";
pub const NOTHING_HEARD: &str = "I'm listening, but I didn't catch that.";
pub const EMPTY_MEMORY: &str = "My memory is empty.";
pub const NO_INFORMATION: &str = "I don't have information on that topic in my mental health database.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Booking,
    Retrieval,
    Unrecognized,
}

impl Route {
    /// Exact, case-sensitive match on the intent name. The front-end's
    /// fallback intent carries free text, so it is answered from the FAQ.
    pub fn for_intent(intent_name: &str) -> Self {
        match intent_name {
            BOOK_APPOINTMENT => Route::Booking,
            GET_SYMPTOM_INFO | FALLBACK_INTENT => Route::Retrieval,
            _ => Route::Unrecognized,
        }
    }
}

fn booking_message(outcome: BookingOutcome) -> String {
    match outcome {
        BookingOutcome::Confirmed(r) => format!(
            "Appointment confirmed for {} on {} at {}. Ref: {}",
            r.patient_name, r.date, r.time, r.reference
        ),
        BookingOutcome::MissingDetails => MISSING_DETAILS.to_string(),
    }
}

fn retrieval_message(outcome: RetrievalOutcome) -> String {
    match outcome {
        RetrievalOutcome::Answer(m) => m.answer,
        RetrievalOutcome::NoMatch { .. } => NO_INFORMATION.to_string(),
        RetrievalOutcome::NothingToSearch => NOTHING_HEARD.to_string(),
        RetrievalOutcome::EmptyCorpus => EMPTY_MEMORY.to_string(),
    }
}

fn fault_message(path: &str, err: &Error) -> String {
    tracing::warn!(path, error = %err, "turn failed");
    format!("{} ERROR: {}", path, err)
}

/// Handles one turn at a time and always closes it with a single reply.
/// Holds no state between turns beyond the two stores.
pub struct DialogRouter<F, A> {
    retriever: FaqRetriever<F>,
    booking: BookingHandler<A>,
}

impl<F: FaqStore, A: AppointmentStore> DialogRouter<F, A> {
    pub fn new(faq_store: F, appointment_store: A) -> Self {
        Self {
            retriever: FaqRetriever::new(faq_store),
            booking: BookingHandler::new(appointment_store),
        }
    }

    pub fn handle(&self, turn: &TurnRequest) -> DialogResponse {
        let route = Route::for_intent(&turn.intent_name);
        tracing::info!(intent = %turn.intent_name, ?route, "turn received");

        let message = match route {
            Route::Booking => match self.booking.book(&turn.slots) {
                Ok(outcome) => booking_message(outcome),
                Err(e) => fault_message("BOOKING", &e),
            },
            Route::Retrieval => match self.retriever.answer_turn(turn) {
                Ok(outcome) => retrieval_message(outcome),
                Err(e) => fault_message("SEARCH", &e),
            },
            Route::Unrecognized => UNRECOGNIZED.to_string(),
        };
        DialogResponse::close(&turn.intent_name, message)
    }

    /// Decode a front-end event and handle it. A payload without an intent
    /// name is still answered, as a system error under the fallback intent.
    pub fn handle_event(&self, event: &Value) -> DialogResponse {
        match decode_turn(event) {
            Ok(turn) => self.handle(&turn),
            Err(e) => DialogResponse::close(FALLBACK_INTENT, fault_message("SYSTEM", &e)),
        }
    }

    /// Same as `handle_event` for a raw JSON payload.
    pub fn handle_raw(&self, payload: &str) -> DialogResponse {
        match serde_json::from_str::<Value>(payload) {
            Ok(event) => self.handle_event(&event),
            Err(e) => {
                let err = Error::MalformedPayload(e.to_string());
                DialogResponse::close(FALLBACK_INTENT, fault_message("SYSTEM", &err))
            }
        }
    }
}
