//! mindcare-text
//!
//! Bag-of-words FAQ matching: `normalize` turns text into a stop-word-free
//! token set, `similarity` scores two sets, and `FaqRetriever` scans a corpus
//! for the best answer.
pub mod normalize;
pub mod retriever;
pub mod similarity;

pub use normalize::{is_stop_word, normalize, TokenSet, STOP_WORDS};
pub use retriever::{best_match, query_text, FaqRetriever, RetrievalOutcome, CONFIDENCE_THRESHOLD};
pub use similarity::similarity;
