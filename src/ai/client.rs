//! HTTP client for the AI suggestion endpoint

use crate::ai::{SuggestionSource, AI_SUGGESTIONS_PATH};
use crate::config::ClientConfig;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

/// Calls `POST /api/ai-domain-suggestions`
pub struct AiSuggestionClient {
    client: Client,
    url: String,
}

impl AiSuggestionClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_client(config.build_http_client()?, config))
    }

    /// Reuse an existing HTTP client
    pub fn with_client(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            url: config.endpoint(AI_SUGGESTIONS_PATH),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SuggestionSource for AiSuggestionClient {
    async fn fetch_suggestions(&self, description: &str) -> Result<Value> {
        let request = SuggestionRequest { description };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %body,
                "Suggestion service rejected the request"
            );
            return Ok(Value::Null);
        }

        let text = response.text().await?;

        // Non-JSON bodies still go to the normalizer, as a plain string.
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::debug!(error = %e, "Suggestion response is not JSON");
                Ok(Value::String(text))
            }
        }
    }

    fn name(&self) -> &'static str {
        "ai-backend"
    }
}

#[derive(Serialize)]
struct SuggestionRequest<'a> {
    description: &'a str,
}
