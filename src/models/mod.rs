//! Shared types used across all modules.
//!
//! Defines the credential record decoded from the backend payload and
//! the filter criteria sent with each fetch. Other modules import from
//! here rather than reaching into each other's internals.

pub mod query;
pub mod record;

pub use query::RecordQuery;
pub use record::CredentialRecord;
