use serde::{Deserialize, Serialize};

/// One ranked candidate from the service search collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSuggestion {
    /// Canonical (hyphenated) service identifier.
    pub id: String,
    /// Raw ranking score.
    pub score: f32,
    /// Score normalized against the best hit, as a percentage.
    pub percentage: f32,
    /// True when the query equals the identifier verbatim. Exact matches are
    /// returned alone and bypass fuzzy ranking.
    pub exact_match: bool,
}

impl ServiceSuggestion {
    /// An exact hit: full score, returned as the only candidate.
    pub fn exact(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            score: 100.0,
            percentage: 100.0,
            exact_match: true,
        }
    }

    /// A fuzzy hit with its percentage normalized against `max_score`.
    pub fn ranked(id: impl Into<String>, score: f32, max_score: f32) -> Self {
        let percentage = if max_score > 0.0 {
            (score / max_score) * 100.0
        } else {
            0.0
        };
        Self {
            id: id.into(),
            score,
            percentage,
            exact_match: false,
        }
    }
}
