//! JSON output renderer.
//!
//! Outputs `{"records": [...], "count": N}` for scripting. Passwords
//! are never masked here; the payload round-trips verbatim.

use crate::models::CredentialRecord;
use crate::output::RecordRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl RecordRenderer for JsonRenderer {
    fn render(&self, records: &[CredentialRecord]) -> String {
        let output = serde_json::json!({
            "records": records,
            "count": records.len(),
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}
