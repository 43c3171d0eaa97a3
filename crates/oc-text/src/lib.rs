//! Text matching leaves for OpsChat.
//!
//! Pure, stateless string utilities used by slot resolution and suggestion
//! ranking: the additive fuzzy similarity scorer, query normalization,
//! correlation-id (UUID) extraction, and Levenshtein edit distance.

pub mod correlation;
pub mod levenshtein;
pub mod normalize;
pub mod similarity;

pub use correlation::extract_correlation_id;
pub use normalize::{canonical_hyphenated, canonical_spaced, fold_to_hyphens, strip_special_chars};
pub use similarity::score;
