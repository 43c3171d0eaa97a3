//! Correlation-id extraction from free text.
//!
//! Users paste full UUIDs, partial UUIDs, or read them out loud with spaces
//! instead of hyphens. Whitespace is folded to hyphens before matching so
//! `"550e8400 e29b 41d4 a716 446655440000"` still resolves, which also
//! repairs ids whose hyphens were stripped by query normalization.

use regex::Regex;
use std::sync::LazyLock;

use crate::normalize::fold_to_hyphens;

// Canonical 8-4-4-4-12 hex groups.
static FULL_UUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}\b",
    )
    .unwrap()
});

// Partial token: 4-8 leading hex digits plus 1-4 hyphenated groups of 4.
// The minimum of two blocks keeps lone hex-looking words from matching.
static PARTIAL_UUID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9a-fA-F]{4,8}(-[0-9a-fA-F]{4}){1,4}\b").unwrap());

/// Extract the first correlation id from `text`, full UUID form first,
/// partial form as fallback. Returns `None` when nothing matches.
pub fn extract_correlation_id(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }
    let folded = fold_to_hyphens(text);
    if let Some(m) = FULL_UUID.find(&folded) {
        return Some(m.as_str().to_string());
    }
    PARTIAL_UUID.find(&folded).map(|m| m.as_str().to_string())
}
