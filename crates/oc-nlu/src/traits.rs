//! Collaborator contracts consumed by the dialogue core.
//!
//! All four are object-safe async traits so the core can be wired with the
//! defaults, with mocks, or with external services without code changes.

use async_trait::async_trait;

use crate::error::NluResult;
use oc_protocol::ServiceSuggestion;

/// Maps normalized user text to an intent label.
///
/// `Ok(None)` (or the `oc_protocol::UNKNOWN_INTENT` sentinel) means
/// low-confidence / no match; `Err` means the classifier itself failed.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> NluResult<Option<String>>;

    /// Name of this classifier (for logging).
    fn name(&self) -> &str;
}

/// Splits text into an ordered sequence of lemma-like tokens.
#[async_trait]
pub trait Tokenizer: Send + Sync {
    async fn tokenize(&self, text: &str) -> NluResult<Vec<String>>;
}

/// Rewrites misspelled query words against a known vocabulary.
#[async_trait]
pub trait SpellCorrector: Send + Sync {
    async fn correct(&self, text: &str) -> NluResult<String>;
}

/// Ranked service lookup. Best candidates first; an exact match is flagged
/// and returned alone.
#[async_trait]
pub trait ServiceSearch: Send + Sync {
    async fn suggest(&self, text: &str) -> NluResult<Vec<ServiceSuggestion>>;
}
