//! Dialogue configuration: the static catalog maps plus the stop-word list.
//!
//! Loaded once at startup — from a config directory when given, else the
//! built-in sample data — and shared read-only across conversations.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use crate::error::{DialogueError, DialogueResult};
use oc_protocol::{IntentFieldMap, ServiceCatalog};

const SERVICE_OPERATIONS_FILE: &str = "service-operations.json";
const INTENT_FIELDS_FILE: &str = "intent-fields.json";
const STOP_WORDS_FILE: &str = "stopwords.txt";

const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "be", "been", "being", "to", "of", "in", "on",
    "at", "for", "with", "from", "by", "about", "as", "into", "and", "or", "but", "if", "then",
    "please", "kindly", "hey", "hi", "hello", "i", "me", "my", "mine", "we", "our", "you", "your",
    "it", "its", "this", "that", "these", "those", "want", "need", "would", "could", "should",
    "will", "can", "do", "does", "did", "have", "has", "had", "what", "which", "who", "when",
    "where", "how", "there", "here", "am", "so", "just", "also", "any", "some", "up", "out", "no",
    "not", "now",
];

/// Immutable, process-wide dialogue configuration.
#[derive(Debug, Clone)]
pub struct DialogueConfig {
    pub catalog: Arc<ServiceCatalog>,
    pub intent_fields: Arc<IntentFieldMap>,
    stop_words: BTreeSet<String>,
}

impl DialogueConfig {
    /// Built-in sample configuration for development and tests.
    pub fn sample() -> Self {
        Self {
            catalog: Arc::new(ServiceCatalog::sample()),
            intent_fields: Arc::new(IntentFieldMap::sample()),
            stop_words: default_stop_words(),
        }
    }

    /// Load `service-operations.json`, `intent-fields.json` and (optionally)
    /// `stopwords.txt` from `dir`. A missing stop-word file falls back to
    /// the built-in list; the JSON maps are required.
    pub fn load(dir: &Path) -> DialogueResult<Self> {
        let catalog = ServiceCatalog::from_file(&dir.join(SERVICE_OPERATIONS_FILE))?;
        let intent_fields = IntentFieldMap::from_file(&dir.join(INTENT_FIELDS_FILE))?;

        let stop_path = dir.join(STOP_WORDS_FILE);
        let stop_words = if stop_path.exists() {
            let text = std::fs::read_to_string(&stop_path).map_err(|e| {
                DialogueError::Config(format!("failed to read {}: {e}", stop_path.display()))
            })?;
            text.lines()
                .map(|l| l.trim().to_lowercase())
                .filter(|l| !l.is_empty())
                .collect()
        } else {
            default_stop_words()
        };

        Ok(Self {
            catalog: Arc::new(catalog),
            intent_fields: Arc::new(intent_fields),
            stop_words,
        })
    }

    /// Drop stop words from a whitespace-separated query.
    pub fn strip_stop_words(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|w| !self.stop_words.contains(&w.to_lowercase()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn default_stop_words() -> BTreeSet<String> {
    DEFAULT_STOP_WORDS.iter().map(|s| s.to_string()).collect()
}
