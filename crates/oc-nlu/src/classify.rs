//! Keyword-based intent classifier — pattern matching for known requests.
//!
//! Handles the common phrasings at zero cost. A statistical classifier can
//! replace it behind the `IntentClassifier` trait without touching the
//! dialogue core.

use async_trait::async_trait;

use crate::error::NluResult;
use crate::traits::IntentClassifier;

/// Pattern-matching classifier over the fixed intent set.
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IntentClassifier for KeywordClassifier {
    async fn classify(&self, text: &str) -> NluResult<Option<String>> {
        Ok(classify_text(text).map(str::to_string))
    }

    fn name(&self) -> &str {
        "keyword"
    }
}

/// Core pattern matching. Order matters: the more specific intents are
/// checked before the catch-all action verbs of `execute_api`.
fn classify_text(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    let lower = lower.trim();

    // get_postman: "postman collection for wallet", "share the collection"
    if matches_any(lower, &["postman", "collection"]) {
        return Some("get_postman");
    }

    // get_api_documentation: "api docs", "swagger", "documentation"
    if matches_any(lower, &["documentation", "api doc", "swagger", "docs"]) {
        return Some("get_api_documentation");
    }

    // get_last_scan before get_vulnerabilities — both mention scans
    if matches_any(lower, &["last scan", "latest scan", "recent scan"]) {
        return Some("get_last_scan");
    }

    // get_vulnerabilities: "vulnerability report", "security scan", "cve"
    if matches_any(lower, &["vulnerab", "security scan", "cve"]) {
        return Some("get_vulnerabilities");
    }

    // get_request_response: "request payload", "show the response"
    if matches_any(lower, &["request", "response", "payload"]) {
        return Some("get_request_response");
    }

    // get_log: "fetch logs", "application log", "trace"
    if matches_any(lower, &["log", "trace"]) {
        return Some("get_log");
    }

    // get_client_info: "client info for wallet"
    if matches_any(lower, &["client"]) {
        return Some("get_client_info");
    }

    // execute_api: action verbs against a service operation
    if matches_any(
        lower,
        &["execute", "invoke", "trigger", "call", "run", "redeem", "submit"],
    ) {
        return Some("execute_api");
    }

    None
}

/// Check if the text contains any of the given patterns.
fn matches_any(text: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| text.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_execute_api() {
        assert_eq!(classify_text("redeem order"), Some("execute_api"));
        assert_eq!(classify_text("execute the wallet api"), Some("execute_api"));
        assert_eq!(classify_text("invoke initRedeem on uat"), Some("execute_api"));
    }

    #[test]
    fn classifies_get_log() {
        assert_eq!(classify_text("fetch logs for wallet"), Some("get_log"));
        assert_eq!(classify_text("application log on prod"), Some("get_log"));
    }

    #[test]
    fn classifies_get_postman() {
        assert_eq!(classify_text("postman collection for wallet"), Some("get_postman"));
    }

    #[test]
    fn classifies_documentation() {
        assert_eq!(classify_text("api docs for billing"), Some("get_api_documentation"));
        assert_eq!(classify_text("swagger for wallet"), Some("get_api_documentation"));
    }

    #[test]
    fn last_scan_beats_vulnerabilities() {
        assert_eq!(classify_text("last scan for wallet"), Some("get_last_scan"));
        assert_eq!(
            classify_text("vulnerability report for wallet"),
            Some("get_vulnerabilities")
        );
    }

    #[test]
    fn classifies_request_response() {
        assert_eq!(
            classify_text("show the request payload"),
            Some("get_request_response")
        );
    }

    #[test]
    fn classifies_client_info() {
        assert_eq!(classify_text("client details for wallet"), Some("get_client_info"));
    }

    #[test]
    fn unrecognized_returns_none() {
        assert_eq!(classify_text("hello there"), None);
        assert_eq!(classify_text("what time is it"), None);
    }
}
