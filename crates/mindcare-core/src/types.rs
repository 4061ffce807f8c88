//! Domain types shared by the retrieval and booking engines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Slot name to raw value. A slot the front-end knows about but could not
/// fill is present with `None`.
pub type Slots = HashMap<String, Option<String>>;

/// A question/answer pair from the FAQ corpus.
///
/// Field names follow the corpus table (`Question`, `Answer`); lowercase
/// names are accepted on input. `id` is carried for loaders only and is never
/// looked at by the matcher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaqEntry {
    #[serde(rename = "QuestionID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(rename = "Question", alias = "question")]
    pub question: String,
    #[serde(rename = "Answer", alias = "answer")]
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self { id: None, question: question.into(), answer: answer.into() }
    }
}

/// One turn as handed over by the conversational front-end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnRequest {
    pub intent_name: String,
    pub slots: Slots,
    pub transcript: Option<String>,
}

impl TurnRequest {
    pub fn new(intent_name: impl Into<String>) -> Self {
        Self { intent_name: intent_name.into(), ..Self::default() }
    }

    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(name.into(), Some(value.into()));
        self
    }

    pub fn with_empty_slot(mut self, name: impl Into<String>) -> Self {
        self.slots.insert(name.into(), None);
        self
    }

    pub fn with_transcript(mut self, transcript: impl Into<String>) -> Self {
        self.transcript = Some(transcript.into());
        self
    }

    /// Value of a filled slot, `None` when absent or unfilled.
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots.get(name).and_then(|v| v.as_deref())
    }
}

/// Best candidate found by a retrieval scan. `score` is in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub answer: String,
    pub score: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppointmentStatus {
    Confirmed,
}

/// A booked appointment. Date, time and department are opaque strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppointmentRecord {
    #[serde(rename = "PatientID")]
    pub reference: String,
    #[serde(rename = "PatientName")]
    pub patient_name: String,
    #[serde(rename = "AppointmentDate")]
    pub date: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Status")]
    pub status: AppointmentStatus,
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
}

impl AppointmentRecord {
    pub fn confirmed(
        reference: impl Into<String>,
        patient_name: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            reference: reference.into(),
            patient_name: patient_name.into(),
            date: date.into(),
            time: time.into(),
            department: department.into(),
            status: AppointmentStatus::Confirmed,
            created_at: Utc::now(),
        }
    }
}
