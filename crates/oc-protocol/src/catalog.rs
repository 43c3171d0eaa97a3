//! Static configuration: intent → required slots, service → operations,
//! and the supported environment set.
//!
//! Loaded once at process start (JSON files or built-in sample data) and
//! treated as read-only for the remainder of the process, so concurrent
//! reads need no locking.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Slot names the built-in resolvers know about. The slot set is open:
/// unknown names fall through to a generic prompt and can gain a resolver
/// via the registry.
pub mod slots {
    pub const SERVICE: &str = "service";
    pub const OPERATION: &str = "operation";
    pub const ENVIRONMENT: &str = "environment";
    pub const CORRELATION_ID: &str = "correlationid";
    pub const SCAN_TYPE: &str = "scantype";
}

/// Deployment environments, matched case-sensitively against query tokens.
pub const ENVIRONMENTS: [&str; 4] = ["dev", "sit", "uat", "prod"];

/// Sentinel a classifier may return instead of `None` for low confidence.
pub const UNKNOWN_INTENT: &str = "unknown";

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Service → ordered operation list. `BTreeMap` keeps iteration (and thus
/// every "first candidate wins" rule) deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceCatalog {
    services: BTreeMap<String, Vec<String>>,
}

impl ServiceCatalog {
    pub fn new(services: BTreeMap<String, Vec<String>>) -> Self {
        Self { services }
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        load_json(path)
    }

    /// All service identifiers, lexicographic order.
    pub fn service_ids(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(String::as_str)
    }

    pub fn contains(&self, service: &str) -> bool {
        self.services.contains_key(service)
    }

    /// Operations registered under `service`, declaration order. Empty for
    /// unknown services.
    pub fn operations(&self, service: &str) -> &[String] {
        self.services
            .get(service)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Built-in sample catalog for development and tests.
    pub fn sample() -> Self {
        let mut services = BTreeMap::new();
        services.insert(
            "billing-engine".to_string(),
            vec![
                "createInvoice".to_string(),
                "applyCredit".to_string(),
                "voidInvoice".to_string(),
            ],
        );
        services.insert(
            "payment-gateway".to_string(),
            vec![
                "authorize".to_string(),
                "capture".to_string(),
                "refundPayment".to_string(),
            ],
        );
        services.insert(
            "tgs-cuv-rewards".to_string(),
            vec![
                "initRedeem".to_string(),
                "redeemOrder".to_string(),
                "getRewardBalance".to_string(),
                "cancelRedeem".to_string(),
            ],
        );
        services.insert(
            "usb-service-isf-rewards".to_string(),
            vec![
                "lookupRewards".to_string(),
                "accruePoints".to_string(),
                "expirePoints".to_string(),
            ],
        );
        services.insert(
            "wallet".to_string(),
            vec![
                "redeem".to_string(),
                "topUp".to_string(),
                "getBalance".to_string(),
                "transferFunds".to_string(),
            ],
        );
        Self { services }
    }
}

/// Intent → ordered required slot list. Slot order fixes prompting order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntentFieldMap {
    intents: BTreeMap<String, Vec<String>>,
}

impl IntentFieldMap {
    pub fn new(intents: BTreeMap<String, Vec<String>>) -> Self {
        Self { intents }
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        load_json(path)
    }

    /// Required slots for `intent`, or `None` for unconfigured intents.
    pub fn required_fields(&self, intent: &str) -> Option<&[String]> {
        self.intents.get(intent).map(Vec::as_slice)
    }

    pub fn intent_names(&self) -> impl Iterator<Item = &str> {
        self.intents.keys().map(String::as_str)
    }

    /// Built-in intent configuration mirroring the supported executor set.
    pub fn sample() -> Self {
        use slots::*;
        let field = |names: &[&str]| names.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let mut intents = BTreeMap::new();
        intents.insert(
            "execute_api".to_string(),
            field(&[SERVICE, OPERATION, ENVIRONMENT]),
        );
        intents.insert(
            "get_request_response".to_string(),
            field(&[SERVICE, OPERATION, ENVIRONMENT]),
        );
        intents.insert(
            "get_log".to_string(),
            field(&[SERVICE, ENVIRONMENT, CORRELATION_ID]),
        );
        intents.insert("get_postman".to_string(), field(&[SERVICE]));
        intents.insert("get_api_documentation".to_string(), field(&[SERVICE]));
        intents.insert("get_client_info".to_string(), field(&[SERVICE, OPERATION]));
        intents.insert(
            "get_vulnerabilities".to_string(),
            field(&[SERVICE, SCAN_TYPE]),
        );
        intents.insert("get_last_scan".to_string(), field(&[SERVICE, SCAN_TYPE]));
        Self { intents }
    }
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_lookups() {
        let catalog = ServiceCatalog::sample();
        assert!(catalog.contains("tgs-cuv-rewards"));
        assert!(catalog.contains("wallet"));
        assert!(!catalog.contains("ghost-service"));
        assert_eq!(catalog.operations("wallet")[0], "redeem");
        assert!(catalog.operations("ghost-service").is_empty());
    }

    #[test]
    fn service_ids_are_sorted() {
        let catalog = ServiceCatalog::sample();
        let ids: Vec<&str> = catalog.service_ids().collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn intent_fields_fix_prompt_order() {
        let intents = IntentFieldMap::sample();
        assert_eq!(
            intents.required_fields("execute_api").unwrap(),
            ["service", "operation", "environment"]
        );
        assert_eq!(
            intents.required_fields("get_log").unwrap(),
            ["service", "environment", "correlationid"]
        );
        assert!(intents.required_fields("make_coffee").is_none());
    }

    #[test]
    fn catalog_deserializes_from_plain_json_map() {
        let json = r#"{"wallet": ["redeem", "topUp"]}"#;
        let catalog: ServiceCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.operations("wallet"), ["redeem", "topUp"]);
    }
}
