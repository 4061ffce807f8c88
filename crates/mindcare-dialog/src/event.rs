//! Decoding of the front-end's turn event.
//!
//! Shape: `{ sessionState: { intent: { name, slots } }, inputTranscript }`
//! where each slot is `null` or `{ value: { originalValue } }`. Only the
//! intent name is mandatory; anything odd inside `slots` reads as unfilled.

use serde_json::Value;

use mindcare_core::types::{Slots, TurnRequest};
use mindcare_core::{Error, Result};

fn slot_value(slot: &Value) -> Option<String> {
    slot.get("value")?
        .get("originalValue")?
        .as_str()
        .map(str::to_owned)
}

/// A transcript key that exists always wins over slots; a null or non-string
/// value reads as an empty transcript.
fn transcript_text(value: &Value) -> String {
    value.as_str().unwrap_or_default().to_string()
}

fn decode_slots(slots: Option<&Value>) -> Slots {
    match slots.and_then(Value::as_object) {
        Some(map) => map.iter().map(|(name, slot)| (name.clone(), slot_value(slot))).collect(),
        None => Slots::new(),
    }
}

pub fn decode_turn(event: &Value) -> Result<TurnRequest> {
    let intent = event
        .get("sessionState")
        .and_then(|s| s.get("intent"))
        .ok_or_else(|| Error::MalformedPayload("missing sessionState.intent".to_string()))?;
    let intent_name = intent
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::MalformedPayload("missing sessionState.intent.name".to_string()))?;

    Ok(TurnRequest {
        intent_name: intent_name.to_string(),
        slots: decode_slots(intent.get("slots")),
        transcript: event.get("inputTranscript").map(transcript_text),
    })
}
