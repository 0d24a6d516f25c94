// Major recommendation engine.
// Pipeline: extract answers → classify interests → filter by education → score → rank.
// Everything below `handlers` is pure and synchronous.

pub mod classifier;
pub mod extractor;
pub mod filter;
pub mod handlers;
pub mod ranker;
pub mod scorer;
pub mod vocabulary;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecommendError {
    #[error("Invalid quiz input: {0}")]
    InvalidInput(String),

    #[error("Major catalog is empty")]
    EmptyCatalog,
}
