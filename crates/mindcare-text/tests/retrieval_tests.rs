use std::sync::Arc;

use mindcare_core::traits::FaqStore;
use mindcare_core::types::{FaqEntry, TurnRequest};
use mindcare_core::{Error, Result};
use mindcare_store::MemoryFaqStore;
use mindcare_text::{FaqRetriever, RetrievalOutcome, CONFIDENCE_THRESHOLD};

fn retriever(pairs: &[(&str, &str)]) -> FaqRetriever<MemoryFaqStore> {
    FaqRetriever::new(MemoryFaqStore::from_pairs(pairs.iter().copied()))
}

struct UnreachableStore;

impl FaqStore for UnreachableStore {
    fn list_all(&self) -> Result<Vec<FaqEntry>> {
        Err(Error::Store("connection refused".to_string()))
    }
}

#[test]
fn shared_keyword_returns_answer() {
    let r = retriever(&[("I feel anxious", "Try breathing exercises")]);
    match r.retrieve(Some("I am anxious")).expect("retrieve") {
        RetrievalOutcome::Answer(m) => {
            assert_eq!(m.answer, "Try breathing exercises");
            assert!(m.score >= CONFIDENCE_THRESHOLD);
        }
        other => panic!("expected answer, got {other:?}"),
    }
}

#[test]
fn unrelated_query_is_no_match() {
    let r = retriever(&[("What is depression", "Depression is a mood disorder.")]);
    assert_eq!(
        r.retrieve(Some("banana spaceship")).expect("retrieve"),
        RetrievalOutcome::NoMatch { best_score: 0.0 }
    );
}

#[test]
fn empty_corpus_reported_regardless_of_query() {
    let r = retriever(&[]);
    for q in ["I feel anxious", "banana", "?"] {
        assert_eq!(r.retrieve(Some(q)).expect("retrieve"), RetrievalOutcome::EmptyCorpus);
    }
}

#[test]
fn missing_or_empty_query_skips_the_store() {
    let r = FaqRetriever::new(UnreachableStore);
    assert_eq!(r.retrieve(None).expect("retrieve"), RetrievalOutcome::NothingToSearch);
    assert_eq!(r.retrieve(Some("")).expect("retrieve"), RetrievalOutcome::NothingToSearch);
}

#[test]
fn store_fault_propagates() {
    let r = FaqRetriever::new(UnreachableStore);
    let err = r.retrieve(Some("anxious")).expect_err("store down");
    assert!(matches!(err, Error::Store(_)));
}

#[test]
fn score_exactly_at_threshold_is_accepted() {
    // {"panic"} vs {"panic", "attack", "chest", "pain", "breath"}: 1/5 = 0.2
    let r = retriever(&[("panic attack chest pain breath", "See a doctor if chest pain persists.")]);
    match r.retrieve(Some("panic")).expect("retrieve") {
        RetrievalOutcome::Answer(m) => assert_eq!(m.score, 0.2),
        other => panic!("expected answer, got {other:?}"),
    }
}

#[test]
fn score_just_below_threshold_is_rejected() {
    // 1/6
    let r = retriever(&[("panic attack chest pain breath dizzy", "answer")]);
    assert!(matches!(
        r.retrieve(Some("panic")).expect("retrieve"),
        RetrievalOutcome::NoMatch { .. }
    ));
}

#[test]
fn repeated_calls_are_deterministic() {
    let r = retriever(&[
        ("how to manage stress", "A"),
        ("stress how to manage", "B"),
        ("managing stress at work", "C"),
    ]);
    let first = r.retrieve(Some("manage stress")).expect("retrieve");
    for _ in 0..10 {
        assert_eq!(r.retrieve(Some("manage stress")).expect("retrieve"), first);
    }
    match first {
        RetrievalOutcome::Answer(m) => assert_eq!(m.answer, "A"),
        other => panic!("expected answer, got {other:?}"),
    }
}

#[test]
fn answer_turn_uses_symptom_slot_without_transcript() {
    let store = Arc::new(MemoryFaqStore::new(vec![FaqEntry::new(
        "What helps with insomnia",
        "Keep a regular sleep schedule.",
    )]));
    let r = FaqRetriever::new(store);
    let turn = TurnRequest::new("GetSymptomInfo").with_slot("Symptom", "insomnia");

    match r.answer_turn(&turn).expect("retrieve") {
        RetrievalOutcome::Answer(m) => assert_eq!(m.answer, "Keep a regular sleep schedule."),
        other => panic!("expected answer, got {other:?}"),
    }
}
