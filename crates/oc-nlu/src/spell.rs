//! Edit-distance spell corrector over the catalog vocabulary.
//!
//! Words already in the vocabulary pass through. Unknown words are replaced
//! by the closest vocabulary entry at or above the accuracy threshold,
//! preferring entries the word is a prefix of, then the longest candidate.
//! Words with no close candidate are kept as typed — correlation ids and
//! free text must survive the pass.

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::error::NluResult;
use crate::traits::SpellCorrector;
use oc_protocol::{ENVIRONMENTS, ServiceCatalog};
use oc_text::levenshtein;

const DEFAULT_ACCURACY: f64 = 0.7;

// Intent-phrasing words that must never be "corrected" away.
const KEYWORDS: [&str; 14] = [
    "execute", "invoke", "redeem", "run", "call", "logs", "log", "postman", "collection",
    "documentation", "scan", "request", "response", "client",
];

pub struct EditDistanceCorrector {
    vocabulary: Vec<String>,
    accuracy: f64,
}

impl EditDistanceCorrector {
    /// Build the vocabulary from service ids, their hyphen segments, every
    /// registered operation name, the environment set, and the intent
    /// keywords.
    pub fn from_catalog(catalog: &ServiceCatalog) -> Self {
        let mut words = BTreeSet::new();
        for id in catalog.service_ids() {
            words.insert(id.to_lowercase());
            for segment in id.split('-').filter(|s| !s.is_empty()) {
                words.insert(segment.to_lowercase());
            }
            for op in catalog.operations(id) {
                words.insert(op.to_lowercase());
            }
        }
        for env in ENVIRONMENTS {
            words.insert(env.to_string());
        }
        for kw in KEYWORDS {
            words.insert(kw.to_string());
        }
        Self {
            vocabulary: words.into_iter().collect(),
            accuracy: DEFAULT_ACCURACY,
        }
    }

    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = accuracy;
        self
    }

    fn correct_word<'a>(&'a self, word: &'a str) -> &'a str {
        if self.vocabulary.iter().any(|v| v.as_str() == word) {
            return word;
        }

        let suggestions: Vec<&String> = self
            .vocabulary
            .iter()
            .filter(|v| levenshtein::ratio(v, word) >= self.accuracy)
            .collect();
        if suggestions.is_empty() {
            return word;
        }

        // Prefer a candidate the typed word prefixes, then the longest one.
        suggestions
            .iter()
            .find(|s| s.starts_with(word))
            .or_else(|| suggestions.iter().max_by_key(|s| s.chars().count()))
            .map(|s| s.as_str())
            .unwrap_or(word)
    }
}

#[async_trait]
impl SpellCorrector for EditDistanceCorrector {
    async fn correct(&self, text: &str) -> NluResult<String> {
        let lower = text.to_lowercase();
        let corrected: Vec<&str> = lower
            .split_whitespace()
            .map(|w| self.correct_word(w))
            .collect();
        Ok(corrected.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oc_protocol::ServiceCatalog;

    fn corrector() -> EditDistanceCorrector {
        EditDistanceCorrector::from_catalog(&ServiceCatalog::sample())
    }

    #[tokio::test]
    async fn known_words_pass_through() {
        assert_eq!(
            corrector().correct("redeem wallet uat").await.unwrap(),
            "redeem wallet uat"
        );
    }

    #[tokio::test]
    async fn close_misspellings_are_fixed() {
        assert_eq!(corrector().correct("walet").await.unwrap(), "wallet");
        assert_eq!(corrector().correct("redem order").await.unwrap(), "redeem order");
    }

    #[tokio::test]
    async fn lowercases_input() {
        assert_eq!(corrector().correct("Redeem WALLET").await.unwrap(), "redeem wallet");
    }

    #[tokio::test]
    async fn unmatched_words_are_kept() {
        assert_eq!(
            corrector().correct("zzzzqqqq wallet").await.unwrap(),
            "zzzzqqqq wallet"
        );
    }
}
