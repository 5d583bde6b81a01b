//! The credential record decoded from one element of the response array.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// One compromised-credential entry as served by the backend.
///
/// `id` is the only field the backend guarantees; the others may come
/// back as `null` or be missing entirely, and decode to empty strings.
/// Records are plain values: the displayed collection is replaced
/// wholesale on each successful fetch, never mutated in place.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub id: String,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub username: String,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub domain: String,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub password: String,
}

fn null_to_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The password never appears in diagnostic output.
impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("domain", &self.domain)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
