//! Output renderers: terminal grid and JSON.

pub mod json;
pub mod table;

use crate::models::CredentialRecord;

/// Trait for rendering the fetched collection to an output format.
pub trait RecordRenderer {
    /// Render records to a string.
    fn render(&self, records: &[CredentialRecord]) -> String;
}
