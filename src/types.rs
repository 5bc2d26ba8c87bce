//! Core types and structures for domain-scout

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A validated `name.extension` pair, lower-cased
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomainQuery {
    pub name: String,
    pub extension: String,
}

impl DomainQuery {
    /// Full domain, e.g. `example.com`
    pub fn full_domain(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }
}

impl std::fmt::Display for DomainQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.name, self.extension)
    }
}

/// Presentation status of a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionStatus {
    Free,
    Taken,
    Premium,
    Unknown,
    Unavailable,
}

impl SuggestionStatus {
    /// Map a registrar status string
    pub fn from_registrar(status: &str) -> Self {
        match status {
            "free" => SuggestionStatus::Free,
            "premium" => SuggestionStatus::Premium,
            "taken" | "active" => SuggestionStatus::Taken,
            _ => SuggestionStatus::Unavailable,
        }
    }

    /// Whether a domain with this status can be bought
    pub fn is_purchasable(&self) -> bool {
        matches!(self, SuggestionStatus::Free | SuggestionStatus::Premium)
    }
}

impl std::fmt::Display for SuggestionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestionStatus::Free => write!(f, "free"),
            SuggestionStatus::Taken => write!(f, "taken"),
            SuggestionStatus::Premium => write!(f, "premium"),
            SuggestionStatus::Unknown => write!(f, "unknown"),
            SuggestionStatus::Unavailable => write!(f, "unavailable"),
        }
    }
}

/// Presentation-ready domain suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainSuggestion {
    pub id: String,
    pub domain_name: String,
    pub original_price: Option<f64>,
    pub discounted_price: f64,
    pub currency: String,
    pub save_percentage: Option<f64>,
    pub status: SuggestionStatus,
    pub is_premium: bool,
}

/// Language hint the suggestion backend may attach to its response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageInfo {
    pub detected_language: String,
    pub primary_tld: String,
}

/// One registrar availability record.
///
/// Every field is optional on the wire. The nested price objects are kept as
/// raw JSON and probed by the accessors below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAvailabilityRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub domain: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
}

/// `null` reads as an empty string
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Anything that is not a string reads as an empty string
fn string_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

impl RawAvailabilityRecord {
    /// `is_premium`, treating absence as false
    pub fn flagged_premium(&self) -> bool {
        self.is_premium.unwrap_or(false)
    }

    /// `premium.price.create`
    pub fn premium_create_price(&self) -> Option<f64> {
        self.premium
            .as_ref()
            .and_then(|p| p.pointer("/price/create"))
            .and_then(Value::as_f64)
    }

    /// `price.product.price`
    pub fn product_price(&self) -> Option<f64> {
        self.price
            .as_ref()
            .and_then(|p| p.pointer("/product/price"))
            .and_then(Value::as_f64)
    }

    /// `price.product.currency`, if present and non-empty
    pub fn product_currency(&self) -> Option<&str> {
        self.price
            .as_ref()
            .and_then(|p| p.pointer("/product/currency"))
            .and_then(Value::as_str)
            .filter(|c| !c.is_empty())
    }
}

/// Availability endpoint response body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub code: Value,
    #[serde(default)]
    pub data: AvailabilityData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailabilityData {
    #[serde(default)]
    pub results: Vec<Value>,
}

impl AvailabilityResponse {
    /// Build a response around already-typed records
    pub fn from_records(records: Vec<RawAvailabilityRecord>) -> Self {
        let results = records
            .into_iter()
            .filter_map(|r| serde_json::to_value(r).ok())
            .collect();
        Self {
            code: Value::from(0),
            data: AvailabilityData { results },
            desc: None,
        }
    }

    /// Decode the result list. Records that do not fit the expected shape are
    /// dropped with a warning instead of failing the batch.
    pub fn records(&self) -> Vec<RawAvailabilityRecord> {
        self.data
            .results
            .iter()
            .filter_map(|raw| match RawAvailabilityRecord::deserialize(raw) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(error = %e, record = %raw, "Dropping malformed availability record");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_mapping() {
        assert_eq!(SuggestionStatus::from_registrar("free"), SuggestionStatus::Free);
        assert_eq!(SuggestionStatus::from_registrar("premium"), SuggestionStatus::Premium);
        assert_eq!(SuggestionStatus::from_registrar("taken"), SuggestionStatus::Taken);
        assert_eq!(SuggestionStatus::from_registrar("active"), SuggestionStatus::Taken);
        assert_eq!(SuggestionStatus::from_registrar("reserved"), SuggestionStatus::Unavailable);
        assert_eq!(SuggestionStatus::from_registrar(""), SuggestionStatus::Unavailable);
    }

    #[test]
    fn test_suggestion_serializes_camel_case() {
        let suggestion = DomainSuggestion {
            id: "a.com".to_string(),
            domain_name: "a.com".to_string(),
            original_price: None,
            discounted_price: 0.0,
            currency: "$".to_string(),
            save_percentage: None,
            status: SuggestionStatus::Taken,
            is_premium: false,
        };
        let value = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(value["domainName"], "a.com");
        assert_eq!(value["originalPrice"], Value::Null);
        assert_eq!(value["status"], "taken");
        assert_eq!(value["isPremium"], false);
    }

    #[test]
    fn test_record_price_probes() {
        let record: RawAvailabilityRecord = serde_json::from_value(json!({
            "domain": "a.com",
            "status": "free",
            "price": { "product": { "price": 9.99, "currency": "EUR" } }
        }))
        .unwrap();
        assert_eq!(record.product_price(), Some(9.99));
        assert_eq!(record.product_currency(), Some("EUR"));
        assert_eq!(record.premium_create_price(), None);
        assert!(!record.flagged_premium());

        let record: RawAvailabilityRecord = serde_json::from_value(json!({
            "domain": "b.com",
            "status": "premium",
            "is_premium": true,
            "premium": { "price": { "create": "lots" } }
        }))
        .unwrap();
        assert!(record.flagged_premium());
        assert_eq!(record.premium_create_price(), None);
    }

    #[test]
    fn test_response_tolerates_missing_data_and_bad_records() {
        let response: AvailabilityResponse = serde_json::from_value(json!({ "code": 0 })).unwrap();
        assert!(response.records().is_empty());

        let response: AvailabilityResponse = serde_json::from_value(json!({
            "code": 0,
            "data": { "results": [
                { "domain": "ok.com", "status": "taken" },
                { "domain": 42, "status": "free" }
            ]}
        }))
        .unwrap();
        let records = response.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].domain, "ok.com");
    }

    #[test]
    fn test_record_with_null_or_odd_status_is_unavailable() {
        let response: AvailabilityResponse = serde_json::from_value(json!({
            "code": 0,
            "data": { "results": [
                { "domain": "odd.com", "status": null },
                { "domain": "odder.com", "status": 7 },
                { "domain": null, "status": "taken" }
            ]}
        }))
        .unwrap();
        let records = response.records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].domain, "odd.com");
        assert_eq!(SuggestionStatus::from_registrar(&records[0].status), SuggestionStatus::Unavailable);
        assert_eq!(SuggestionStatus::from_registrar(&records[1].status), SuggestionStatus::Unavailable);
        assert_eq!(records[2].domain, "");
    }

    #[test]
    fn test_response_code_of_any_shape_decodes() {
        for code in [json!("0"), json!(0.0), json!(null), json!({ "ok": true })] {
            let response: AvailabilityResponse =
                serde_json::from_value(json!({ "code": code, "data": { "results": [] } })).unwrap();
            assert!(response.records().is_empty());
        }
    }

    #[test]
    fn test_query_display() {
        let query = DomainQuery {
            name: "example".to_string(),
            extension: "com".to_string(),
        };
        assert_eq!(query.to_string(), "example.com");
        assert_eq!(query.full_domain(), "example.com");
    }
}
