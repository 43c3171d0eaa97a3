use serde::{Deserialize, Serialize};

/// Domain status codes carried on every turn response. HTTP-analogous but
/// decided by the dialogue core, not the transport.
pub mod status {
    /// Turn handled to completion (reset confirmation or executed intent).
    pub const COMPLETE: u16 = 200;
    /// More slots are needed; `text` carries the prompt for the next one.
    pub const NEEDS_MORE_INFO: u16 = 206;
    /// Unrecognized intent or an internal inconsistency.
    pub const UNRECOGNIZED: u16 = 400;
    /// The intent executor failed to produce a response.
    pub const EXECUTION_FAILED: u16 = 500;
}

/// The single per-turn result the dialogue core hands back to the transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnResponse {
    /// One of the [`status`] codes.
    pub status_code: u16,
    /// User-facing response text (prompt, confirmation, or execution summary).
    pub text: String,
    /// Active intent at the time of the response, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    /// Downloadable artifact produced by execution (e.g. `wallet.json`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl TurnResponse {
    pub fn complete(
        text: impl Into<String>,
        intent: Option<String>,
        file_name: Option<String>,
    ) -> Self {
        Self {
            status_code: status::COMPLETE,
            text: text.into(),
            intent,
            file_name,
        }
    }

    pub fn needs_more_info(text: impl Into<String>, intent: Option<String>) -> Self {
        Self {
            status_code: status::NEEDS_MORE_INFO,
            text: text.into(),
            intent,
            file_name: None,
        }
    }

    pub fn unrecognized(text: impl Into<String>, intent: Option<String>) -> Self {
        Self {
            status_code: status::UNRECOGNIZED,
            text: text.into(),
            intent,
            file_name: None,
        }
    }

    pub fn execution_failed(text: impl Into<String>) -> Self {
        Self {
            status_code: status::EXECUTION_FAILED,
            text: text.into(),
            intent: None,
            file_name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_response_roundtrip() {
        let resp = TurnResponse::complete(
            "Executing API",
            Some("execute_api".into()),
            Some("wallet.json".into()),
        );
        let json = serde_json::to_string(&resp).unwrap();
        let back: TurnResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back.status_code, status::COMPLETE);
        assert_eq!(back.intent.as_deref(), Some("execute_api"));
        assert_eq!(back.file_name.as_deref(), Some("wallet.json"));
    }

    #[test]
    fn absent_fields_are_skipped() {
        let resp = TurnResponse::needs_more_info("Which environment?", None);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("intent"));
        assert!(!json.contains("file_name"));
        assert!(json.contains("206"));
    }
}
