//! Shape-tolerant extraction of domain lists from suggestion payloads
//!
//! The suggestion backend does not commit to a response schema. Known
//! envelopes are probed in a fixed order and anything unrecognized degrades to
//! a best-effort scan, so extraction never fails.

use crate::types::LanguageInfo;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Domains pulled out of a suggestion payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub domains: Vec<String>,
    pub language: Option<LanguageInfo>,
}

/// Recognized payload shapes, in probe order
#[derive(Debug)]
enum Envelope<'a> {
    /// `["a.com", ...]`
    List(&'a [Value]),
    /// `null`
    Empty,
    /// `{"domains": [...], "languageInfo"?: {...}}`
    Domains {
        domains: &'a [Value],
        language: Option<LanguageInfo>,
    },
    /// `{"data": {"domains": [...]}}`
    Nested(&'a [Value]),
    /// A string that may hold encoded JSON or a single domain
    Encoded(&'a str),
    /// Any other object
    Unstructured(&'a Map<String, Value>),
    /// Numbers and booleans
    Opaque,
}

impl<'a> Envelope<'a> {
    fn detect(value: &'a Value) -> Self {
        match value {
            Value::Array(items) => Envelope::List(items),
            Value::Null => Envelope::Empty,
            Value::Object(map) => {
                if let Some(domains) = map.get("domains").and_then(Value::as_array) {
                    let language = map
                        .get("languageInfo")
                        .and_then(|info| LanguageInfo::deserialize(info).ok());
                    Envelope::Domains { domains, language }
                } else if let Some(domains) = value.pointer("/data/domains").and_then(Value::as_array) {
                    Envelope::Nested(domains)
                } else {
                    Envelope::Unstructured(map)
                }
            }
            Value::String(text) => Envelope::Encoded(text),
            Value::Bool(_) | Value::Number(_) => Envelope::Opaque,
        }
    }
}

/// Extract the domain list from any suggestion payload
pub fn extract_domains(value: &Value) -> Vec<String> {
    extract(value).domains
}

/// Extract the domain list plus any language hint riding along with it
pub fn extract(value: &Value) -> Extraction {
    match Envelope::detect(value) {
        Envelope::List(items) => {
            tracing::debug!(count = items.len(), "Suggestion payload is a bare list");
            Extraction {
                domains: strings(items),
                language: None,
            }
        }
        Envelope::Empty => Extraction::default(),
        Envelope::Domains { domains, language } => {
            if let Some(info) = &language {
                tracing::info!(
                    detected_language = %info.detected_language,
                    primary_tld = %info.primary_tld,
                    "Suggestion backend detected language"
                );
            }
            Extraction {
                domains: strings(domains),
                language,
            }
        }
        Envelope::Nested(domains) => {
            tracing::debug!("Suggestion payload has nested data.domains");
            Extraction {
                domains: strings(domains),
                language: None,
            }
        }
        Envelope::Encoded(text) => match serde_json::from_str::<Value>(text) {
            Ok(decoded) => extract(&decoded),
            Err(_) if text.contains('.') => Extraction {
                domains: vec![text.to_string()],
                language: None,
            },
            Err(_) => Extraction::default(),
        },
        Envelope::Unstructured(map) => Extraction {
            domains: scan_values(map),
            language: None,
        },
        Envelope::Opaque => Extraction::default(),
    }
}

/// Fallback: first array among the object's values, else the first
/// dot-containing string. Values are visited in insertion order.
fn scan_values(map: &Map<String, Value>) -> Vec<String> {
    if let Some(items) = map.values().find_map(Value::as_array) {
        tracing::debug!("Found an array among suggestion payload values");
        return strings(items);
    }

    map.values()
        .filter_map(Value::as_str)
        .find(|s| s.contains('.'))
        .map(|s| vec![s.to_string()])
        .unwrap_or_else(|| {
            tracing::debug!("Could not find domains in suggestion payload");
            Vec::new()
        })
}

/// Non-string entries cannot name a domain and are skipped
fn strings(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}
