//! Registrar availability checking

pub mod client;
pub mod transformer;

// Re-export main functionality
pub use client::AvailabilityClient;
pub use transformer::{transform, DEFAULT_CURRENCY};

use crate::error::Result;
use crate::types::{AvailabilityResponse, DomainQuery};
use async_trait::async_trait;

/// Path of the availability endpoint, relative to the backend base URL
pub const AVAILABILITY_PATH: &str = "/api/check-domain-availability";

/// Trait for registrar availability lookups
#[async_trait]
pub trait AvailabilitySource: Send + Sync {
    /// Check a batch of domains in one request
    async fn check_availability(&self, domains: &[DomainQuery]) -> Result<AvailabilityResponse>;

    /// Get source name
    fn name(&self) -> &'static str;
}
