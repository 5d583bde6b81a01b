//! CredentialSource trait and HTTP retrieval.
//!
//! Provides the seam between the view layer and the backend endpoint so
//! tests can substitute a canned source.

use async_trait::async_trait;
use thiserror::Error;

use crate::constants::USER_AGENT;
use crate::models::{CredentialRecord, RecordQuery};

/// The single retrieval error kind.
///
/// Network failures, non-2xx statuses, and malformed payloads are
/// indistinguishable: callers either get the full decoded collection or
/// a reason string for the diagnostic channel. There is no retry.
#[derive(Debug, Error)]
#[error("failed to fetch credential records: {reason}")]
pub struct FetchError {
    reason: String,
}

impl FetchError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Trait for fetching the credential collection.
#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// Issue one retrieval and return the decoded records in server order.
    async fn fetch(&self, query: &RecordQuery) -> Result<Vec<CredentialRecord>, FetchError>;
}

/// HTTP-backed source issuing exactly one GET per fetch.
///
/// No caching, no deduplication, and no timeout: a hung request stays
/// in flight until the process ends or a newer fetch supersedes it.
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::new(format!("could not build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Construct the outbound request without sending it.
    ///
    /// Split out so the query-string contract stays testable offline:
    /// absent filters must not appear as keys, and the limit always must.
    pub fn build_request(&self, query: &RecordQuery) -> Result<reqwest::Request, FetchError> {
        self.client
            .get(&self.base_url)
            .query(&query.params())
            .build()
            .map_err(|e| FetchError::new(format!("invalid request: {e}")))
    }
}

#[async_trait]
impl CredentialSource for HttpSource {
    async fn fetch(&self, query: &RecordQuery) -> Result<Vec<CredentialRecord>, FetchError> {
        let request = self.build_request(query)?;
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| FetchError::new(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(format!("endpoint returned HTTP {status}")));
        }

        response
            .json::<Vec<CredentialRecord>>()
            .await
            .map_err(|e| FetchError::new(format!("malformed response payload: {e}")))
    }
}
