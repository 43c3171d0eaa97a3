//! Scripted collaborator mocks for tests.
//!
//! Each mock returns a fixed answer or a scripted failure, so dialogue
//! tests can pin classifier/search behavior without the default
//! implementations' heuristics.

use async_trait::async_trait;

use crate::error::{NluError, NluResult};
use crate::traits::{IntentClassifier, ServiceSearch};
use oc_protocol::ServiceSuggestion;

/// Classifier that always answers with the same label (or `None`).
pub struct MockClassifier {
    intent: Option<String>,
    fail: bool,
}

impl MockClassifier {
    pub fn always(intent: impl Into<String>) -> Self {
        Self {
            intent: Some(intent.into()),
            fail: false,
        }
    }

    pub fn unknown() -> Self {
        Self {
            intent: None,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            intent: None,
            fail: true,
        }
    }
}

#[async_trait]
impl IntentClassifier for MockClassifier {
    async fn classify(&self, _text: &str) -> NluResult<Option<String>> {
        if self.fail {
            return Err(NluError::Classifier("scripted failure".into()));
        }
        Ok(self.intent.clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Search that returns a scripted suggestion list (or a scripted failure).
pub struct MockSearch {
    results: Vec<ServiceSuggestion>,
    fail: bool,
}

impl MockSearch {
    pub fn with(results: Vec<ServiceSuggestion>) -> Self {
        Self {
            results,
            fail: false,
        }
    }

    pub fn empty() -> Self {
        Self::with(Vec::new())
    }

    pub fn failing() -> Self {
        Self {
            results: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl ServiceSearch for MockSearch {
    async fn suggest(&self, _text: &str) -> NluResult<Vec<ServiceSuggestion>> {
        if self.fail {
            return Err(NluError::Search("scripted failure".into()));
        }
        Ok(self.results.clone())
    }
}
