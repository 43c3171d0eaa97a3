//! NLU collaborator error types.

use thiserror::Error;

/// Errors surfaced by the NLU collaborators. The dialogue core propagates
/// these uncaught; retries are the caller's responsibility.
#[derive(Debug, Error)]
pub enum NluError {
    #[error("classifier error: {0}")]
    Classifier(String),

    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    #[error("spell corrector error: {0}")]
    SpellCorrector(String),

    #[error("service search error: {0}")]
    Search(String),
}

/// Convenience alias for NLU results.
pub type NluResult<T> = Result<T, NluError>;
