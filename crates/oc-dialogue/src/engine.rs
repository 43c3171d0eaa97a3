//! The per-turn conversational state machine.
//!
//! Turn pipeline: reset check → raw-text capture → normalization
//! (special-character strip, stop-word removal, spell correction) →
//! classification on the first turn → slot resolution → prompt or execute.
//! A completed intent always consumes the session, success or not.

use std::sync::Arc;

use crate::config::DialogueConfig;
use crate::error::DialogueResult;
use crate::executor::{IntentExecutor, TemplateExecutor};
use crate::prompt::PromptBuilder;
use crate::resolver::{EntityResolver, SlotRegistry};
use crate::session::SessionState;
use oc_nlu::{
    CatalogSearcher, EditDistanceCorrector, IntentClassifier, KeywordClassifier, ServiceSearch,
    SpellCorrector, WhitespaceTokenizer,
};
use oc_protocol::{TurnResponse, UNKNOWN_INTENT};
use oc_text::normalize::strip_special_chars;

const RESET_COMMANDS: [&str; 2] = ["reset", "cancel"];
const RESET_TEXT: &str = "Conversation reset. How can I help you?";
const NOT_UNDERSTOOD_TEXT: &str = "I didn't understand. Please rephrase your query.";
const INCONSISTENT_TEXT: &str = "Something went wrong. Please try again.";
const EXECUTION_FAILED_TEXT: &str = "Unexpected error occurred. Please try again.";

/// Shared, stateless turn handler. Per-conversation state lives in the
/// `SessionState` the caller passes in; the caller must serialize turns
/// per conversation.
pub struct DialogueEngine {
    config: DialogueConfig,
    classifier: Arc<dyn IntentClassifier>,
    spell: Arc<dyn SpellCorrector>,
    resolver: Arc<EntityResolver>,
    prompts: PromptBuilder,
    executor: Arc<dyn IntentExecutor>,
}

impl DialogueEngine {
    /// Wire an engine from explicit collaborators. Callers with a custom
    /// slot registry construct the `EntityResolver` themselves.
    pub fn new(
        config: DialogueConfig,
        classifier: Arc<dyn IntentClassifier>,
        spell: Arc<dyn SpellCorrector>,
        search: Arc<dyn ServiceSearch>,
        resolver: Arc<EntityResolver>,
        executor: Arc<dyn IntentExecutor>,
    ) -> Self {
        let prompts = PromptBuilder::new(config.catalog.clone(), search, resolver.clone());
        Self {
            config,
            classifier,
            spell,
            resolver,
            prompts,
            executor,
        }
    }

    /// Engine backed by the default collaborators: keyword classifier,
    /// catalog search, edit-distance spell correction, templated executor.
    pub fn with_defaults(config: DialogueConfig) -> Self {
        let search: Arc<dyn ServiceSearch> = Arc::new(CatalogSearcher::new(config.catalog.clone()));
        let resolver = Arc::new(EntityResolver::new(
            SlotRegistry::with_defaults(search.clone()),
            Arc::new(WhitespaceTokenizer::new()),
            config.catalog.clone(),
        ));
        let spell = Arc::new(EditDistanceCorrector::from_catalog(&config.catalog));
        Self::new(
            config,
            Arc::new(KeywordClassifier::new()),
            spell,
            search,
            resolver,
            Arc::new(TemplateExecutor::new()),
        )
    }

    /// Handle one user turn against `session`.
    pub async fn handle_turn(
        &self,
        session: &mut SessionState,
        raw_input: &str,
    ) -> DialogueResult<TurnResponse> {
        let trimmed = raw_input.trim();
        if RESET_COMMANDS.iter().any(|c| trimmed.eq_ignore_ascii_case(c)) {
            tracing::info!("conversation reset requested");
            session.reset();
            return Ok(TurnResponse::complete(RESET_TEXT, None, None));
        }

        session.record_raw_initial_text(raw_input);

        let normalized = self.preprocess(raw_input).await?;
        tracing::debug!(normalized = %normalized, "normalized turn text");

        if session.intent().is_none() {
            self.start_conversation(session, &normalized).await
        } else {
            self.continue_conversation(session, &normalized).await
        }
    }

    /// Special-character strip → stop-word removal → spell correction.
    async fn preprocess(&self, raw: &str) -> DialogueResult<String> {
        let stripped = strip_special_chars(raw);
        let filtered = self.config.strip_stop_words(&stripped);
        Ok(self.spell.correct(&filtered).await?)
    }

    async fn start_conversation(
        &self,
        session: &mut SessionState,
        text: &str,
    ) -> DialogueResult<TurnResponse> {
        let label = self
            .classifier
            .classify(text)
            .await?
            .filter(|l| !l.is_empty() && l.as_str() != UNKNOWN_INTENT);
        let Some(intent) = label else {
            tracing::info!("intent not recognized");
            return Ok(TurnResponse::unrecognized(NOT_UNDERSTOOD_TEXT, None));
        };
        let Some(fields) = self.config.intent_fields.required_fields(&intent) else {
            tracing::warn!(intent = %intent, "classified intent has no field configuration");
            return Ok(TurnResponse::unrecognized(NOT_UNDERSTOOD_TEXT, None));
        };

        tracing::info!(intent = %intent, "conversation started");
        session.activate_intent(&intent, fields.to_vec(), text);

        let resolved = self.resolver.resolve_missing(session).await?;
        session.merge_fields(resolved);
        self.finish_turn(session).await
    }

    async fn continue_conversation(
        &self,
        session: &mut SessionState,
        text: &str,
    ) -> DialogueResult<TurnResponse> {
        tracing::info!(intent = ?session.intent(), "continuing conversation");
        session.set_current_text(text);

        let resolved = self.resolver.resolve_missing(session).await?;
        session.merge_fields(resolved);
        self.finish_turn(session).await
    }

    async fn finish_turn(&self, session: &mut SessionState) -> DialogueResult<TurnResponse> {
        if session.is_complete() {
            return self.execute_and_reset(session).await;
        }

        if let Some(prompt) = self.prompts.build_prompt(session).await? {
            return Ok(TurnResponse::needs_more_info(
                prompt,
                session.intent().map(str::to_string),
            ));
        }

        // Incomplete session with no derivable prompt. Unreachable while
        // the session invariants hold; the state is left intact for the
        // next turn.
        tracing::warn!(intent = ?session.intent(), "session incomplete but no prompt available");
        Ok(TurnResponse::unrecognized(
            INCONSISTENT_TEXT,
            session.intent().map(str::to_string),
        ))
    }

    async fn execute_and_reset(&self, session: &mut SessionState) -> DialogueResult<TurnResponse> {
        let response = self.executor.execute(session).await;
        session.reset();
        match response {
            Some(response) => {
                tracing::info!(status = response.status_code, "intent executed");
                Ok(response)
            }
            None => {
                tracing::error!("intent execution returned no response");
                Ok(TurnResponse::execution_failed(EXECUTION_FAILED_TEXT))
            }
        }
    }
}
