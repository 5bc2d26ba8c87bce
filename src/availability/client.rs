//! HTTP client for the availability endpoint

use crate::availability::{AvailabilitySource, AVAILABILITY_PATH};
use crate::config::ClientConfig;
use crate::error::{DomainScoutError, Result};
use crate::types::{AvailabilityResponse, DomainQuery};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

/// Message used when an error body cannot be decoded
const UNREADABLE_ERROR_BODY: &str = "Failed to parse error response from backend.";

/// Calls `POST /api/check-domain-availability`
pub struct AvailabilityClient {
    client: Client,
    url: String,
}

impl AvailabilityClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_client(config.build_http_client()?, config))
    }

    /// Reuse an existing HTTP client
    pub fn with_client(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            url: config.endpoint(AVAILABILITY_PATH),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl AvailabilitySource for AvailabilityClient {
    async fn check_availability(&self, domains: &[DomainQuery]) -> Result<AvailabilityResponse> {
        let start_time = Instant::now();
        let request = AvailabilityRequest { domains };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(status, &body);
            tracing::error!(
                status = %status,
                error = %message,
                "Availability service rejected the request"
            );
            return Err(DomainScoutError::backend(
                AVAILABILITY_PATH,
                message,
                Some(status.as_u16()),
            ));
        }

        let text = response.text().await?;

        let parsed: AvailabilityResponse = match serde_json::from_str(&text) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::error!(error = %e, body = %text, "Undecodable availability response");
                return Err(e.into());
            }
        };

        tracing::debug!(
            domains_requested = domains.len(),
            results = parsed.data.results.len(),
            duration_ms = %start_time.elapsed().as_millis(),
            "Availability check completed"
        );

        Ok(parsed)
    }

    fn name(&self) -> &'static str {
        "availability-backend"
    }
}

/// Message for a non-2xx response: the body's `error` field, else the status text
fn error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => value
            .get("error")
            .and_then(Value::as_str)
            .filter(|e| !e.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| {
                format!(
                    "Backend error: {}",
                    status.canonical_reason().unwrap_or("Unknown Status")
                )
            }),
        Err(_) => UNREADABLE_ERROR_BODY.to_string(),
    }
}

#[derive(Serialize)]
struct AvailabilityRequest<'a> {
    domains: &'a [DomainQuery],
}
