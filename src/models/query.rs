//! Filter criteria snapshotted into each fetch.

use crate::constants::DEFAULT_LIMIT;

/// The filters and record cap sent with one retrieval.
///
/// Empty filter strings normalize to `None`, which omits the key from
/// the outbound query entirely — the backend reads absence as
/// "match all". The limit key is always sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordQuery {
    email: Option<String>,
    domain: Option<String>,
    limit: u32,
}

impl RecordQuery {
    pub fn new(email: &str, domain: &str, limit: u32) -> Self {
        Self {
            email: some_if_nonempty(email),
            domain: some_if_nonempty(domain),
            limit,
        }
    }

    /// An unfiltered query with the default cap.
    pub fn unfiltered() -> Self {
        Self::new("", "", DEFAULT_LIMIT)
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Wire query pairs in request order.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(3);
        if let Some(email) = &self.email {
            params.push(("email", email.clone()));
        }
        if let Some(domain) = &self.domain {
            params.push(("domain", domain.clone()));
        }
        params.push(("limit", self.limit.to_string()));
        params
    }
}

impl Default for RecordQuery {
    fn default() -> Self {
        Self::unfiltered()
    }
}

fn some_if_nonempty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
