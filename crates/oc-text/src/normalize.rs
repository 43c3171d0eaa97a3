//! Query and identifier normalization.
//!
//! Free-text queries get non-alphanumerics stripped before tokenization;
//! service identifiers move between their spoken form ("tgs cuv rewards")
//! and their canonical hyphenated form ("tgs-cuv-rewards").

/// Replace every non-alphanumeric character with a space and collapse
/// whitespace runs. `"run the init-Redeem op!"` → `"run the init Redeem op"`.
pub fn strip_special_chars(text: &str) -> String {
    let replaced: String = text
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    collapse_whitespace(&replaced)
}

/// Collapse whitespace runs to single spaces and trim.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Fold whitespace runs into single hyphens. Tolerates spoken-style ids:
/// `"abc 123"` → `"abc-123"`.
pub fn fold_to_hyphens(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Canonical spaced form of a service identifier: hyphen/whitespace runs
/// become single spaces. `"tgs-cuv-rewards"` → `"tgs cuv rewards"`.
pub fn canonical_spaced(name: &str) -> String {
    name.split(|c: char| c == '-' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Canonical hyphenated form of a service identifier, the shape stored in
/// the session. `"tgs cuv rewards"` → `"tgs-cuv-rewards"`.
pub fn canonical_hyphenated(name: &str) -> String {
    name.split(|c: char| c == '-' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
