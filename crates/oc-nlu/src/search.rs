//! Ranked service search over the static catalog.
//!
//! Two steps, mirroring the usual index shape: an exact-identifier lookup
//! that short-circuits with a single flagged result, then boosted fuzzy
//! ranking where hits on the service name weigh more than hits on its
//! operations. A query with no name hit returns nothing — operation words
//! alone ("redeem order") must not pull in a service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::NluResult;
use crate::traits::ServiceSearch;
use oc_protocol::{ServiceCatalog, ServiceSuggestion};
use oc_text::normalize::canonical_hyphenated;

const NAME_BOOST: f32 = 3.0;
const OPS_BOOST: f32 = 1.5;
const MIN_SCORE_THRESHOLD: f32 = 0.3;
const MAX_RESULTS: usize = 3;

pub struct CatalogSearcher {
    catalog: Arc<ServiceCatalog>,
}

impl CatalogSearcher {
    pub fn new(catalog: Arc<ServiceCatalog>) -> Self {
        Self { catalog }
    }

    fn exact_match(&self, query: &str) -> Option<ServiceSuggestion> {
        let id = canonical_hyphenated(&query.to_lowercase());
        self.catalog
            .contains(&id)
            .then(|| ServiceSuggestion::exact(id))
    }

    fn fuzzy_matches(&self, query: &str) -> Vec<ServiceSuggestion> {
        let tokens: Vec<String> = query
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .collect();
        if tokens.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(String, f32)> = Vec::new();
        for id in self.catalog.service_ids() {
            let segments: Vec<&str> = id.split('-').filter(|s| !s.is_empty()).collect();
            let name_hits = tokens
                .iter()
                .filter(|t| segments.contains(&t.as_str()))
                .count();
            if name_hits == 0 {
                continue;
            }
            let ops_hits = tokens
                .iter()
                .filter(|t| {
                    self.catalog
                        .operations(id)
                        .iter()
                        .any(|op| op.to_lowercase().contains(t.as_str()))
                })
                .count();

            let score = name_hits as f32 * NAME_BOOST + ops_hits as f32 * OPS_BOOST;
            if score >= MIN_SCORE_THRESHOLD {
                scored.push((id.to_string(), score));
            }
        }

        // Descending score; equal scores order lexicographically by id.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        scored.truncate(MAX_RESULTS);

        let max_score = scored.first().map(|(_, s)| *s).unwrap_or(1.0);
        scored
            .into_iter()
            .map(|(id, score)| ServiceSuggestion::ranked(id, score, max_score))
            .collect()
    }
}

#[async_trait]
impl ServiceSearch for CatalogSearcher {
    async fn suggest(&self, text: &str) -> NluResult<Vec<ServiceSuggestion>> {
        if let Some(exact) = self.exact_match(text.trim()) {
            return Ok(vec![exact]);
        }
        Ok(self.fuzzy_matches(text))
    }
}
