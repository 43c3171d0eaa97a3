//! Per-conversation mutable state.
//!
//! Exactly one `SessionState` is live per conversation and it is owned by
//! that conversation's turn handler — the hosting layer serializes turns,
//! so no lock lives here.
//!
//! Invariants:
//! - `required_fields` is empty iff `intent` is unset
//! - `provided_fields` keys are always a subset of `required_fields`
//! - the session is complete iff every required field has a value

use std::collections::HashMap;

/// Conversation state accumulated across turns, cleared on reset or after
/// intent execution.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    intent: Option<String>,
    /// First turn's untouched text; correlation-id extraction needs the
    /// characters normalization strips.
    raw_initial_text: Option<String>,
    /// First turn's normalized text.
    initial_text: Option<String>,
    /// Most recent turn's normalized text (unset on the first turn).
    current_text: Option<String>,
    provided_fields: HashMap<String, String>,
    required_fields: Vec<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear everything; the next turn starts a fresh conversation.
    pub fn reset(&mut self) {
        self.intent = None;
        self.raw_initial_text = None;
        self.initial_text = None;
        self.current_text = None;
        self.provided_fields.clear();
        self.required_fields.clear();
    }

    pub fn intent(&self) -> Option<&str> {
        self.intent.as_deref()
    }

    pub fn raw_initial_text(&self) -> Option<&str> {
        self.raw_initial_text.as_deref()
    }

    pub fn current_text(&self) -> Option<&str> {
        self.current_text.as_deref()
    }

    /// Record the very first turn's raw text; later turns are no-ops.
    pub fn record_raw_initial_text(&mut self, raw: &str) {
        if self.raw_initial_text.is_none() {
            self.raw_initial_text = Some(raw.to_string());
        }
    }

    pub fn set_current_text(&mut self, text: &str) {
        self.current_text = Some(text.to_string());
    }

    /// Set the classified intent once, with its ordered slot list and the
    /// normalized first-turn text.
    pub fn activate_intent(&mut self, intent: &str, required_fields: Vec<String>, text: &str) {
        self.intent = Some(intent.to_string());
        self.initial_text = Some(text.to_string());
        self.required_fields = required_fields;
    }

    pub fn required_fields(&self) -> &[String] {
        &self.required_fields
    }

    pub fn provided(&self, field: &str) -> Option<&str> {
        self.provided_fields.get(field).map(String::as_str)
    }

    pub fn provided_fields(&self) -> &HashMap<String, String> {
        &self.provided_fields
    }

    /// Merge newly resolved slots. Existing values are never overwritten
    /// and only required slots are accepted.
    pub fn merge_fields(&mut self, resolved: HashMap<String, String>) {
        for (field, value) in resolved {
            if !self.required_fields.contains(&field) {
                continue;
            }
            self.provided_fields.entry(field).or_insert(value);
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.required_fields.is_empty()
            && self.provided_fields.len() == self.required_fields.len()
    }

    pub fn has_missing_fields(&self) -> bool {
        self.required_fields
            .iter()
            .any(|f| !self.provided_fields.contains_key(f))
    }

    /// First still-missing slot in declaration order — the next one to
    /// prompt for.
    pub fn first_missing(&self) -> Option<&str> {
        self.required_fields
            .iter()
            .find(|f| !self.provided_fields.contains_key(*f))
            .map(String::as_str)
    }

    /// Everything the user has said so far that slot resolution may draw
    /// from: the normalized first turn plus the latest turn.
    pub fn accumulated_text(&self) -> String {
        match (self.initial_text.as_deref(), self.current_text.as_deref()) {
            (Some(initial), Some(current)) => format!("{initial} {current}"),
            (Some(initial), None) => initial.to_string(),
            (None, Some(current)) => current.to_string(),
            (None, None) => String::new(),
        }
    }

    /// Text for correlation-id extraction: the latest turn when present,
    /// else the raw first turn (normalization strips hyphens a UUID needs).
    pub fn correlation_text(&self) -> &str {
        self.current_text
            .as_deref()
            .or(self.raw_initial_text.as_deref())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_session() -> SessionState {
        let mut s = SessionState::new();
        s.record_raw_initial_text("Redeem order!");
        s.activate_intent(
            "execute_api",
            vec!["service".into(), "operation".into(), "environment".into()],
            "redeem order",
        );
        s
    }

    #[test]
    fn fresh_session_is_inert() {
        let s = SessionState::new();
        assert!(s.intent().is_none());
        assert!(s.required_fields().is_empty());
        assert!(!s.is_complete());
        assert!(!s.has_missing_fields());
        assert!(s.first_missing().is_none());
    }

    #[test]
    fn completion_requires_every_field() {
        let mut s = active_session();
        assert!(!s.is_complete());
        s.merge_fields(HashMap::from([("service".to_string(), "wallet".to_string())]));
        assert!(!s.is_complete());
        assert_eq!(s.first_missing(), Some("operation"));
        s.merge_fields(HashMap::from([
            ("operation".to_string(), "redeem".to_string()),
            ("environment".to_string(), "uat".to_string()),
        ]));
        assert!(s.is_complete());
        assert!(!s.has_missing_fields());
    }

    #[test]
    fn merge_never_overwrites() {
        let mut s = active_session();
        s.merge_fields(HashMap::from([("service".to_string(), "wallet".to_string())]));
        s.merge_fields(HashMap::from([(
            "service".to_string(),
            "payment-gateway".to_string(),
        )]));
        assert_eq!(s.provided("service"), Some("wallet"));
    }

    #[test]
    fn merge_rejects_unknown_slots() {
        let mut s = active_session();
        s.merge_fields(HashMap::from([("color".to_string(), "blue".to_string())]));
        assert!(s.provided("color").is_none());
        assert_eq!(s.provided_fields().len(), 0);
    }

    #[test]
    fn raw_initial_text_is_write_once() {
        let mut s = SessionState::new();
        s.record_raw_initial_text("first");
        s.record_raw_initial_text("second");
        assert_eq!(s.raw_initial_text(), Some("first"));
    }

    #[test]
    fn accumulated_text_joins_initial_and_current() {
        let mut s = active_session();
        assert_eq!(s.accumulated_text(), "redeem order");
        s.set_current_text("wallet");
        assert_eq!(s.accumulated_text(), "redeem order wallet");
    }

    #[test]
    fn correlation_text_prefers_current_then_raw() {
        let mut s = active_session();
        assert_eq!(s.correlation_text(), "Redeem order!");
        s.set_current_text("abcd-1234");
        assert_eq!(s.correlation_text(), "abcd-1234");
    }

    #[test]
    fn reset_clears_everything() {
        let mut s = active_session();
        s.set_current_text("wallet");
        s.merge_fields(HashMap::from([("service".to_string(), "wallet".to_string())]));
        s.reset();
        assert!(s.intent().is_none());
        assert!(s.raw_initial_text().is_none());
        assert!(s.current_text().is_none());
        assert!(s.required_fields().is_empty());
        assert!(s.provided_fields().is_empty());
        assert_eq!(s.accumulated_text(), "");
    }
}
