//! Dialogue core error types.

use thiserror::Error;

/// Errors that abort the current turn. Collaborator failures pass through
/// unchanged; the transport decides how to report them.
#[derive(Debug, Error)]
pub enum DialogueError {
    #[error(transparent)]
    Nlu(#[from] oc_nlu::NluError),

    #[error(transparent)]
    Catalog(#[from] oc_protocol::CatalogError),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience alias for dialogue results.
pub type DialogueResult<T> = Result<T, DialogueError>;
