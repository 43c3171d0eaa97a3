//! NLU collaborators for OpsChat.
//!
//! The dialogue core delegates every potentially heavy or replaceable
//! language task to one of four traits: `IntentClassifier`, `Tokenizer`,
//! `SpellCorrector`, `ServiceSearch`. Each ships with a lightweight default
//! implementation good enough to run the system end to end, plus scripted
//! mocks for tests.

pub mod classify;
pub mod error;
pub mod mock;
pub mod search;
pub mod spell;
pub mod tokenize;
pub mod traits;

pub use classify::KeywordClassifier;
pub use error::{NluError, NluResult};
pub use mock::{MockClassifier, MockSearch};
pub use search::CatalogSearcher;
pub use spell::EditDistanceCorrector;
pub use tokenize::WhitespaceTokenizer;
pub use traits::{IntentClassifier, ServiceSearch, SpellCorrector, Tokenizer};
