//! AI suggestion backend integration
//!
//! The backend turns a free-text project description into candidate domain
//! names. Its payload shape is not fixed, so responses go through
//! [`normalizer`] before anything else looks at them.

pub mod client;
pub mod normalizer;

// Re-export main functionality
pub use client::AiSuggestionClient;
pub use normalizer::{extract, extract_domains, Extraction};

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Path of the suggestion endpoint, relative to the backend base URL
pub const AI_SUGGESTIONS_PATH: &str = "/api/ai-domain-suggestions";

/// Source of raw AI suggestion payloads
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Ask for suggestions for a project description.
    ///
    /// Returns the untouched payload. Backend rejections come back as
    /// `Value::Null`; only transport failures are errors.
    async fn fetch_suggestions(&self, description: &str) -> Result<Value>;

    /// Get source name
    fn name(&self) -> &'static str;
}
