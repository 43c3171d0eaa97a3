//! Intent execution — turns a completed slot set into a response.
//!
//! The engine hands over the session once every required slot has a value
//! and resets it afterwards regardless of the outcome. `None` from the
//! executor signals failure and maps to the 500-equivalent turn status.

use async_trait::async_trait;

use crate::session::SessionState;
use oc_protocol::{TurnResponse, slots};

/// Final step of a completed conversation.
#[async_trait]
pub trait IntentExecutor: Send + Sync {
    /// Execute the session's intent. `None` means execution failed.
    async fn execute(&self, session: &SessionState) -> Option<TurnResponse>;
}

/// Default executor: a templated summary per intent, plus the artifact
/// file name for intents that produce a downloadable file.
pub struct TemplateExecutor;

impl TemplateExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TemplateExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IntentExecutor for TemplateExecutor {
    async fn execute(&self, session: &SessionState) -> Option<TurnResponse> {
        let intent = session.intent()?.to_string();
        let slot = |name: &str| session.provided(name).unwrap_or("-").to_string();
        let service = slot(slots::SERVICE);
        let service_file = Some(format!("{service}.json"));

        let response = match intent.as_str() {
            "execute_api" => TurnResponse::complete(
                format!(
                    "Executing API:\nService: {service}\nOperation: {}\nEnvironment: {}",
                    slot(slots::OPERATION),
                    slot(slots::ENVIRONMENT),
                ),
                Some(intent),
                service_file,
            ),
            "get_request_response" => TurnResponse::complete(
                format!(
                    "Request / Response:\nService: {service}\nOperation: {}\nEnvironment: {}",
                    slot(slots::OPERATION),
                    slot(slots::ENVIRONMENT),
                ),
                Some(intent),
                service_file,
            ),
            "get_log" => TurnResponse::complete(
                format!(
                    "Fetching logs:\nService: {service}\nEnvironment: {}\nCorrelation ID: {}",
                    slot(slots::ENVIRONMENT),
                    slot(slots::CORRELATION_ID),
                ),
                Some(intent),
                service_file,
            ),
            "get_postman" => TurnResponse::complete(
                format!("Postman collection:\nService: {service}"),
                Some(intent),
                service_file,
            ),
            "get_api_documentation" => TurnResponse::complete(
                format!("API documentation:\nService: {service}"),
                Some(intent),
                service_file,
            ),
            "get_client_info" => TurnResponse::complete(
                format!(
                    "Client information:\nService: {service}\nOperation: {}",
                    slot(slots::OPERATION),
                ),
                Some(intent),
                None,
            ),
            "get_vulnerabilities" => TurnResponse::complete(
                format!(
                    "Vulnerability report:\nService: {service}\nScan type: {}",
                    slot(slots::SCAN_TYPE),
                ),
                Some(intent),
                None,
            ),
            "get_last_scan" => TurnResponse::complete(
                format!(
                    "Last scan details:\nService: {service}\nScan type: {}",
                    slot(slots::SCAN_TYPE),
                ),
                Some(intent),
                None,
            ),
            _ => TurnResponse::unrecognized(
                "Sorry, I couldn't understand your request.",
                Some(intent),
            ),
        };
        Some(response)
    }
}
