//! Domain Scout - AI domain suggestions with registrar availability and pricing
//!
//! Describe a project and get candidate domains from the suggestion backend,
//! or look up a single domain. Either way the registrar's answer comes back as
//! presentation-ready [`DomainSuggestion`] records.

pub mod ai;
pub mod availability;
pub mod config;
pub mod display;
pub mod domain;
pub mod error;
pub mod service;
pub mod types;

use std::path::Path;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::{DomainScoutError, Result};
pub use types::{DomainQuery, DomainSuggestion, LanguageInfo, RawAvailabilityRecord, SuggestionStatus};

// Re-export main functionality
pub use ai::extract_domains;
pub use availability::transform;
pub use domain::parse_domain;
pub use service::{DomainService, Suggestions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}

/// Initialize from a specific env file
pub fn init_from(path: &Path) -> Result<()> {
    dotenv::from_path(path)
        .map_err(|e| DomainScoutError::config(format!("Failed to load {}: {}", path.display(), e)))
}
