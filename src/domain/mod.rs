//! Domain string handling

pub mod validator;

// Re-export main functionality
pub use validator::{parse_domain, DomainValidator};
