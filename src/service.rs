//! Suggestion orchestration
//!
//! Wires the parser, the two backends, the normalizer and the transformer
//! together for the two user-facing flows.

use crate::ai::{self, AiSuggestionClient, Extraction, SuggestionSource};
use crate::availability::{transformer, AvailabilityClient, AvailabilitySource};
use crate::config::ClientConfig;
use crate::domain::DomainValidator;
use crate::error::{DomainScoutError, Result};
use crate::types::{DomainQuery, DomainSuggestion, LanguageInfo, RawAvailabilityRecord};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Instant;

/// Suggestions for a description, plus the backend's language hint if any
#[derive(Debug, Clone, Default)]
pub struct Suggestions {
    pub suggestions: Vec<DomainSuggestion>,
    pub language: Option<LanguageInfo>,
}

/// Entry point for the AI-generation and single-domain flows.
///
/// Stateless between calls apart from the random source used for the
/// synthetic discounts.
#[derive(Clone)]
pub struct DomainService {
    suggestions: Arc<dyn SuggestionSource>,
    availability: Arc<dyn AvailabilitySource>,
    validator: DomainValidator,
    rng: Arc<Mutex<StdRng>>,
}

impl DomainService {
    /// Create a service over the given backends
    pub fn new(
        suggestions: Arc<dyn SuggestionSource>,
        availability: Arc<dyn AvailabilitySource>,
    ) -> Self {
        Self {
            suggestions,
            availability,
            validator: DomainValidator::new(),
            rng: Arc::new(Mutex::new(StdRng::from_entropy())),
        }
    }

    /// Create a service talking HTTP to the configured backend
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let client = config.build_http_client()?;
        Ok(Self::new(
            Arc::new(AiSuggestionClient::with_client(client.clone(), config)),
            Arc::new(AvailabilityClient::with_client(client, config)),
        ))
    }

    /// Pin the random source so discount figures are reproducible
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
            ..self
        }
    }

    /// Generate suggestions for a free-text project description
    pub async fn suggest_from_description(&self, description: &str) -> Result<Vec<DomainSuggestion>> {
        Ok(self.suggest_with_language(description).await?.suggestions)
    }

    /// Generate suggestions and keep the backend's language hint
    pub async fn suggest_with_language(&self, description: &str) -> Result<Suggestions> {
        if description.trim().is_empty() {
            return Err(DomainScoutError::empty_input("Please enter a project description."));
        }

        let start_time = Instant::now();

        let payload = self.suggestions.fetch_suggestions(description).await?;
        let Extraction { domains, language } = ai::extract(&payload);

        if domains.is_empty() {
            tracing::info!(source = self.suggestions.name(), "No domain suggestions returned");
            return Ok(Suggestions {
                suggestions: Vec::new(),
                language,
            });
        }

        let queries = self.validator.parse_all(&domains);
        if queries.is_empty() {
            tracing::warn!(
                candidates = domains.len(),
                "AI suggestions could not be parsed into valid domains"
            );
            return Ok(Suggestions {
                suggestions: Vec::new(),
                language,
            });
        }

        let response = self.availability.check_availability(&queries).await?;
        let suggestions = self.transform_all(&response.records());

        tracing::info!(
            candidates = domains.len(),
            checked = queries.len(),
            suggestions = suggestions.len(),
            duration_ms = %start_time.elapsed().as_millis(),
            "Domain suggestions completed"
        );

        Ok(Suggestions {
            suggestions,
            language,
        })
    }

    /// Check one `name.extension` pair
    pub async fn check_single(&self, name: &str, extension: &str) -> Result<Option<DomainSuggestion>> {
        let query = DomainQuery {
            name: name.trim().to_lowercase(),
            extension: extension.trim().to_lowercase(),
        };

        let response = self
            .availability
            .check_availability(std::slice::from_ref(&query))
            .await?;

        let suggestion = response
            .records()
            .first()
            .and_then(|record| self.transform_one(record));

        tracing::debug!(
            domain = %query,
            found = suggestion.is_some(),
            "Single domain check completed"
        );

        Ok(suggestion)
    }

    /// Parse raw user input as a domain and check it.
    ///
    /// Blank and malformed input is rejected before any request is sent.
    pub async fn search(&self, input: &str) -> Result<Option<DomainSuggestion>> {
        if input.trim().is_empty() {
            return Err(DomainScoutError::empty_input("Please enter a domain name to search."));
        }

        let query = self.validator.parse(input)?;
        self.check_single(&query.name, &query.extension).await
    }

    fn transform_one(&self, record: &RawAvailabilityRecord) -> Option<DomainSuggestion> {
        let mut rng = self.rng.lock();
        transformer::transform(record, &mut *rng)
    }

    fn transform_all(&self, records: &[RawAvailabilityRecord]) -> Vec<DomainSuggestion> {
        let mut rng = self.rng.lock();
        records
            .iter()
            .filter_map(|record| transformer::transform(record, &mut *rng))
            .collect()
    }
}
