//! Prompt generation for the next missing slot.
//!
//! Always asks for the first missing slot in the intent's declared order,
//! so elicitation order is fixed per intent. Service and operation prompts
//! carry ranked suggestions when the accumulated text yields any.

use std::sync::Arc;

use crate::error::DialogueResult;
use crate::resolver::EntityResolver;
use crate::session::SessionState;
use oc_nlu::ServiceSearch;
use oc_protocol::{ENVIRONMENTS, ServiceCatalog, slots};

pub struct PromptBuilder {
    catalog: Arc<ServiceCatalog>,
    search: Arc<dyn ServiceSearch>,
    resolver: Arc<EntityResolver>,
}

impl PromptBuilder {
    pub fn new(
        catalog: Arc<ServiceCatalog>,
        search: Arc<dyn ServiceSearch>,
        resolver: Arc<EntityResolver>,
    ) -> Self {
        Self {
            catalog,
            search,
            resolver,
        }
    }

    /// Prompt for the first missing slot, or `None` when nothing is
    /// missing.
    pub async fn build_prompt(&self, session: &SessionState) -> DialogueResult<Option<String>> {
        let Some(field) = session.first_missing() else {
            return Ok(None);
        };
        let prompt = match field {
            slots::SERVICE => self.service_prompt(session).await?,
            slots::OPERATION => self.operation_prompt(session).await?,
            slots::ENVIRONMENT => format!(
                "Which environment? Options: {}",
                ENVIRONMENTS.join(", ")
            ),
            slots::CORRELATION_ID => {
                "Please provide the correlation ID (UUID or token).\n\
                 Example: 550e8400-e29b-41d4-a716-446655440000"
                    .to_string()
            }
            slots::SCAN_TYPE => "Which scan type? Options: blackduck, fortify".to_string(),
            other => format!("Please provide {other}."),
        };
        Ok(Some(prompt))
    }

    async fn service_prompt(&self, session: &SessionState) -> DialogueResult<String> {
        let text = session.accumulated_text();
        let suggestions = self.search.suggest(&text).await?;
        if !suggestions.is_empty() {
            let ids: Vec<&str> = suggestions.iter().map(|s| s.id.as_str()).collect();
            return Ok(format!("Which service? Suggestions:\n{}", ids.join("\n")));
        }
        let all: Vec<&str> = self.catalog.service_ids().collect();
        Ok(format!("Which service? Known services:\n{}", all.join("\n")))
    }

    async fn operation_prompt(&self, session: &SessionState) -> DialogueResult<String> {
        let Some(service) = session.provided(slots::SERVICE) else {
            // operation is prompted only after service resolved; defensive
            return Ok("Which operation?".to_string());
        };

        let text = session.accumulated_text();
        let suggestions = self.resolver.suggest_operations(&text, service).await?;
        let operations = self.catalog.operations(service);

        // The user attempted something this turn that did not resolve.
        let attempted = session
            .current_text()
            .map(str::trim)
            .filter(|t| !t.is_empty());

        Ok(match (attempted, suggestions.is_empty()) {
            (Some(att), true) => format!(
                "No operation matching '{att}' found for {service}. Available operations:\n{}",
                operations.join("\n")
            ),
            (Some(att), false) => format!(
                "No operation matching '{att}' found for {service}. Did you mean:\n{}",
                suggestions.join("\n")
            ),
            (None, false) => format!("Which operation? Suggestions:\n{}", suggestions.join("\n")),
            (None, true) => format!(
                "Which operation? Available operations for {service}:\n{}",
                operations.join("\n")
            ),
        })
    }
}
