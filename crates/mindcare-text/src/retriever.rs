use mindcare_core::traits::FaqStore;
use mindcare_core::types::{FaqEntry, MatchResult, TurnRequest};
use mindcare_core::Result;

use crate::normalize::{normalize, TokenSet};
use crate::similarity::similarity;

/// Best scores strictly below this are reported as no match.
pub const CONFIDENCE_THRESHOLD: f32 = 0.2;

/// Slot consulted when a turn carries no transcript.
pub const SYMPTOM_SLOT: &str = "Symptom";

#[derive(Debug, Clone, PartialEq)]
pub enum RetrievalOutcome {
    Answer(MatchResult),
    /// Corpus was searched but the best score fell under the threshold.
    NoMatch { best_score: f32 },
    NothingToSearch,
    EmptyCorpus,
}

/// Pick the query text for a turn.
///
/// A transcript, when present, is used verbatim even if empty. Otherwise the
/// `Symptom` slot is used when it holds a non-empty value.
pub fn query_text(turn: &TurnRequest) -> Option<&str> {
    match turn.transcript.as_deref() {
        Some(transcript) => Some(transcript),
        None => turn.slot(SYMPTOM_SLOT).filter(|s| !s.is_empty()),
    }
}

/// Highest-scoring entry for `query`. Ties keep the earliest entry.
/// `None` only for an empty corpus.
pub fn best_match(query: &TokenSet, corpus: &[FaqEntry]) -> Option<MatchResult> {
    let mut best: Option<(f32, &FaqEntry)> = None;
    for entry in corpus {
        let score = similarity(query, &normalize(&entry.question));
        match best {
            Some((best_score, _)) if score <= best_score => {}
            _ => best = Some((score, entry)),
        }
    }
    best.map(|(score, entry)| MatchResult { answer: entry.answer.clone(), score })
}

/// Answers free-text questions from the FAQ store. Re-reads and
/// re-normalizes the whole corpus on every call.
pub struct FaqRetriever<S> {
    store: S,
}

impl<S: FaqStore> FaqRetriever<S> {
    pub fn new(store: S) -> Self { Self { store } }

    pub fn retrieve(&self, query_text: Option<&str>) -> Result<RetrievalOutcome> {
        let query_text = match query_text {
            Some(text) if !text.is_empty() => text,
            _ => return Ok(RetrievalOutcome::NothingToSearch),
        };

        let corpus = self.store.list_all()?;
        let query = normalize(query_text);
        let Some(best) = best_match(&query, &corpus) else {
            return Ok(RetrievalOutcome::EmptyCorpus);
        };
        tracing::debug!(
            candidates = corpus.len(),
            query_tokens = query.len(),
            best_score = best.score,
            "faq scan finished"
        );

        if best.score < CONFIDENCE_THRESHOLD {
            Ok(RetrievalOutcome::NoMatch { best_score: best.score })
        } else {
            Ok(RetrievalOutcome::Answer(best))
        }
    }

    pub fn answer_turn(&self, turn: &TurnRequest) -> Result<RetrievalOutcome> {
        self.retrieve(query_text(turn))
    }
}
