//! Slot resolution: fill every still-missing required slot from the
//! conversation text, one pass per turn.
//!
//! Resolvers live in a registry keyed by slot name, so a new slot type is a
//! new registry entry, not a state-machine change. Resolution never
//! overwrites a slot that already has a value, and a pass sees the slots it
//! resolved earlier in the same pass (operation needs the service picked
//! two lines up).

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use crate::error::DialogueResult;
use crate::session::SessionState;
use oc_nlu::{ServiceSearch, Tokenizer};
use oc_protocol::{ENVIRONMENTS, ServiceCatalog, slots};
use oc_text::normalize::{canonical_hyphenated, canonical_spaced};
use oc_text::{extract_correlation_id, similarity};

/// Everything a slot resolver may look at for one resolution pass.
pub struct ResolveCx<'a> {
    /// Accumulated normalized conversation text (first turn + latest turn).
    pub text: &'a str,
    /// Text for raw-sensitive extraction: the latest turn when present,
    /// else the untouched first turn.
    pub correlation_text: &'a str,
    /// Tokenized accumulated text.
    pub tokens: &'a [String],
    pub catalog: &'a ServiceCatalog,
    session: &'a SessionState,
    pending: &'a HashMap<String, String>,
}

impl ResolveCx<'_> {
    /// Value of a slot filled in an earlier turn or earlier in this pass.
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.pending
            .get(name)
            .map(String::as_str)
            .or_else(|| self.session.provided(name))
    }
}

/// One entry in the slot registry.
#[async_trait]
pub trait SlotResolver: Send + Sync {
    /// Slot name this resolver fills.
    fn slot(&self) -> &str;

    /// Extract a value from the context, or `None` when the text does not
    /// carry one. Collaborator failures propagate.
    async fn resolve(&self, cx: &ResolveCx<'_>) -> DialogueResult<Option<String>>;
}

/// Registry mapping slot name → resolver, populated at startup.
pub struct SlotRegistry {
    resolvers: Vec<Box<dyn SlotResolver>>,
    index: HashMap<String, usize>,
}

impl SlotRegistry {
    pub fn new() -> Self {
        Self {
            resolvers: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Registry with the built-in resolvers: service, operation,
    /// environment, correlationid, scantype.
    pub fn with_defaults(search: Arc<dyn ServiceSearch>) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ServiceResolver::new(search)));
        registry.register(Box::new(OperationResolver));
        registry.register(Box::new(EnvironmentResolver));
        registry.register(Box::new(CorrelationIdResolver));
        registry.register(Box::new(ScanTypeResolver));
        registry
    }

    /// Add a resolver. A later registration for the same slot wins.
    pub fn register(&mut self, resolver: Box<dyn SlotResolver>) {
        let name = resolver.slot().to_string();
        self.resolvers.push(resolver);
        self.index.insert(name, self.resolvers.len() - 1);
    }

    pub fn lookup(&self, slot: &str) -> Option<&dyn SlotResolver> {
        self.index.get(slot).map(|&i| self.resolvers[i].as_ref())
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

impl Default for SlotRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Fills missing slots and ranks operation suggestions.
pub struct EntityResolver {
    registry: SlotRegistry,
    tokenizer: Arc<dyn Tokenizer>,
    catalog: Arc<ServiceCatalog>,
}

impl EntityResolver {
    pub fn new(
        registry: SlotRegistry,
        tokenizer: Arc<dyn Tokenizer>,
        catalog: Arc<ServiceCatalog>,
    ) -> Self {
        Self {
            registry,
            tokenizer,
            catalog,
        }
    }

    /// One resolution pass: try every required slot that has no value yet.
    /// Returns only the newly resolved slots; the caller merges them.
    pub async fn resolve_missing(
        &self,
        session: &SessionState,
    ) -> DialogueResult<HashMap<String, String>> {
        let text = session.accumulated_text();
        let tokens = self.tokenizer.tokenize(&text).await?;
        let mut pending: HashMap<String, String> = HashMap::new();

        for field in session.required_fields() {
            if session.provided(field).is_some() {
                continue;
            }
            let Some(resolver) = self.registry.lookup(field) else {
                tracing::debug!(slot = %field, "no resolver registered");
                continue;
            };
            let value = {
                let cx = ResolveCx {
                    text: &text,
                    correlation_text: session.correlation_text(),
                    tokens: &tokens,
                    catalog: &self.catalog,
                    session,
                    pending: &pending,
                };
                resolver.resolve(&cx).await?
            };
            if let Some(value) = value {
                tracing::debug!(slot = %field, value = %value, "slot resolved");
                pending.insert(field.clone(), value);
            }
        }

        Ok(pending)
    }

    /// Rank the operations of `service` against free text. Score per
    /// operation: +100 when the operation name contains the whole query,
    /// +50 more when the query is longer than two characters, plus the
    /// similarity of every query token against the name. Zero-scoring
    /// operations are dropped; ties order by name.
    pub async fn suggest_operations(
        &self,
        text: &str,
        service: &str,
    ) -> DialogueResult<Vec<String>> {
        if text.trim().is_empty() || service.is_empty() {
            return Ok(Vec::new());
        }
        let operations = self.catalog.operations(service);
        if operations.is_empty() {
            return Ok(Vec::new());
        }

        let query = text.to_lowercase();
        let tokens = self.tokenizer.tokenize(&query).await?;

        let mut scored: Vec<(&String, u32)> = Vec::new();
        for op in operations {
            let op_lower = op.to_lowercase();
            let mut score = 0u32;
            if op_lower.contains(&query) {
                score += 100;
                if query.len() > 2 {
                    score += 50;
                }
            }
            for token in &tokens {
                score += similarity::score(token, op);
            }
            if score > 0 {
                scored.push((op, score));
            }
        }

        scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        Ok(scored.into_iter().map(|(op, _)| op.clone()).collect())
    }
}

// ── Built-in resolvers ──────────────────────────────────────────

/// Accepts a search candidate that either equals the input verbatim or
/// names a known service (both compared in canonical spaced form). First
/// accepted candidate wins; the stored value is canonically hyphenated.
pub struct ServiceResolver {
    search: Arc<dyn ServiceSearch>,
}

impl ServiceResolver {
    pub fn new(search: Arc<dyn ServiceSearch>) -> Self {
        Self { search }
    }
}

#[async_trait]
impl SlotResolver for ServiceResolver {
    fn slot(&self) -> &str {
        slots::SERVICE
    }

    async fn resolve(&self, cx: &ResolveCx<'_>) -> DialogueResult<Option<String>> {
        let candidates = self.search.suggest(cx.text).await?;
        for candidate in candidates {
            let spaced = canonical_spaced(&candidate.id);
            if spaced.eq_ignore_ascii_case(cx.text.trim()) {
                return Ok(Some(canonical_hyphenated(&spaced)));
            }
            let known = cx
                .catalog
                .service_ids()
                .any(|id| canonical_spaced(id).eq_ignore_ascii_case(&spaced));
            if known {
                return Ok(Some(canonical_hyphenated(&spaced)));
            }
        }
        Ok(None)
    }
}

/// Accepts the first registered operation for which some token is an exact
/// case-insensitive match. Requires the service slot — an operation list
/// only exists per service.
pub struct OperationResolver;

#[async_trait]
impl SlotResolver for OperationResolver {
    fn slot(&self) -> &str {
        slots::OPERATION
    }

    async fn resolve(&self, cx: &ResolveCx<'_>) -> DialogueResult<Option<String>> {
        let Some(service) = cx.slot(slots::SERVICE) else {
            return Ok(None);
        };
        for op in cx.catalog.operations(service) {
            if cx.tokens.iter().any(|t| similarity::score(t, op) == 100) {
                return Ok(Some(op.clone()));
            }
        }
        Ok(None)
    }
}

/// First token that is a case-sensitive member of the environment set.
pub struct EnvironmentResolver;

#[async_trait]
impl SlotResolver for EnvironmentResolver {
    fn slot(&self) -> &str {
        slots::ENVIRONMENT
    }

    async fn resolve(&self, cx: &ResolveCx<'_>) -> DialogueResult<Option<String>> {
        Ok(cx
            .tokens
            .iter()
            .find(|t| ENVIRONMENTS.contains(&t.as_str()))
            .cloned())
    }
}

/// Full-then-partial UUID extraction over the raw-sensitive text.
pub struct CorrelationIdResolver;

#[async_trait]
impl SlotResolver for CorrelationIdResolver {
    fn slot(&self) -> &str {
        slots::CORRELATION_ID
    }

    async fn resolve(&self, cx: &ResolveCx<'_>) -> DialogueResult<Option<String>> {
        Ok(extract_correlation_id(cx.correlation_text))
    }
}

static SCAN_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:black\s?duck|fortify)\b").unwrap());

/// Security-scan flavor, canonicalized to `blackduck` / `fortify`.
pub struct ScanTypeResolver;

#[async_trait]
impl SlotResolver for ScanTypeResolver {
    fn slot(&self) -> &str {
        slots::SCAN_TYPE
    }

    async fn resolve(&self, cx: &ResolveCx<'_>) -> DialogueResult<Option<String>> {
        Ok(SCAN_TYPE.find(cx.text).map(|m| {
            m.as_str()
                .to_lowercase()
                .split_whitespace()
                .collect::<String>()
        }))
    }
}
