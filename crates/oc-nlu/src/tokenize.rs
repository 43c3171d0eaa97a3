//! Whitespace tokenizer.
//!
//! Lowercases and splits on whitespace. A lemmatizing pipeline can replace
//! it behind the `Tokenizer` trait; slot resolution only needs stable,
//! ordered tokens.

use async_trait::async_trait;

use crate::error::NluResult;
use crate::traits::Tokenizer;

pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WhitespaceTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tokenizer for WhitespaceTokenizer {
    async fn tokenize(&self, text: &str) -> NluResult<Vec<String>> {
        Ok(text
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lowercases_and_splits() {
        let tokens = WhitespaceTokenizer::new()
            .tokenize("Redeem Order on UAT")
            .await
            .unwrap();
        assert_eq!(tokens, ["redeem", "order", "on", "uat"]);
    }

    #[tokio::test]
    async fn empty_text_yields_no_tokens() {
        let tokens = WhitespaceTokenizer::new().tokenize("   ").await.unwrap();
        assert!(tokens.is_empty());
    }
}
