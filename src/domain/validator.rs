//! Domain string parsing and validation

use crate::error::{DomainScoutError, Result};
use crate::types::DomainQuery;
use regex::Regex;
use std::sync::OnceLock;

/// `<label>.<tld>`: alphanumeric label with internal hyphens, alphabetic TLD
const DOMAIN_PATTERN: &str = r"^([a-z0-9][a-z0-9-]*[a-z0-9])\.([a-z]{2,})$";

fn domain_regex() -> Result<&'static Regex> {
    static DOMAIN_RE: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();
    DOMAIN_RE
        .get_or_init(|| Regex::new(DOMAIN_PATTERN))
        .as_ref()
        .map_err(|e| DomainScoutError::internal(e.to_string()))
}

/// Parses user-entered domain strings into [`DomainQuery`] values
#[derive(Debug, Clone, Copy, Default)]
pub struct DomainValidator;

impl DomainValidator {
    /// Create a new domain validator
    pub fn new() -> Self {
        Self
    }

    /// Parse a single `name.tld` string. Case-insensitive, output is lower-cased.
    pub fn parse(&self, input: &str) -> Result<DomainQuery> {
        let normalized = self.normalize(input);

        let captures = domain_regex()?
            .captures(&normalized)
            .ok_or_else(|| DomainScoutError::invalid_format(input.trim()))?;

        Ok(DomainQuery {
            name: captures[1].to_string(),
            extension: captures[2].to_string(),
        })
    }

    /// Parse every candidate, discarding the ones that do not match
    pub fn parse_all<S: AsRef<str>>(&self, candidates: &[S]) -> Vec<DomainQuery> {
        candidates
            .iter()
            .filter_map(|candidate| {
                let candidate = candidate.as_ref();
                match self.parse(candidate) {
                    Ok(query) => Some(query),
                    Err(e) => {
                        tracing::debug!(candidate = %candidate, error = %e, "Could not parse domain string");
                        None
                    }
                }
            })
            .collect()
    }

    /// Check if a string parses as a domain
    pub fn is_valid_format(&self, input: &str) -> bool {
        self.parse(input).is_ok()
    }

    /// Normalize domain input
    pub fn normalize(&self, input: &str) -> String {
        input.trim().to_lowercase()
    }
}

/// Parse with the default validator
pub fn parse_domain(input: &str) -> Result<DomainQuery> {
    DomainValidator::new().parse(input)
}
