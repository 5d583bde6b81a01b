//! The view state machine.
//!
//! Replaces an informal loading-flag-plus-collection pair with a tagged
//! phase and a single completion entry point. Every fetch carries a
//! monotonic sequence number; completions that are no longer current
//! are discarded, so the displayed collection always reflects the
//! last-initiated fetch that resolved. A failed fetch leaves the
//! previous collection untouched.

use crate::client::FetchError;
use crate::models::{CredentialRecord, RecordQuery};

/// Where the view currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No current fetch in flight.
    Idle,
    /// The fetch with this sequence number is in flight.
    Loading { seq: u64 },
}

/// What [`ViewState::complete`] did with an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The collection was replaced with this many records.
    Replaced(usize),
    /// The fetch failed; the previous collection is untouched.
    Failed(String),
    /// The outcome was superseded by a newer fetch and discarded.
    Stale,
}

/// Owned view state: displayed records, buffered filters, fetch phase.
///
/// All mutation goes through the transition methods below; nothing else
/// touches the fields.
#[derive(Debug)]
pub struct ViewState {
    phase: Phase,
    records: Vec<CredentialRecord>,
    email_filter: String,
    domain_filter: String,
    limit: u32,
    last_issued: u64,
}

impl ViewState {
    pub fn new(limit: u32) -> Self {
        Self {
            phase: Phase::Idle,
            records: Vec::new(),
            email_filter: String::new(),
            domain_filter: String::new(),
            limit,
            last_issued: 0,
        }
    }

    // ── Buffered edits (no fetch, no phase change) ─────────────────

    pub fn set_email(&mut self, value: &str) {
        self.email_filter = value.to_string();
    }

    pub fn set_domain(&mut self, value: &str) {
        self.domain_filter = value.to_string();
    }

    pub fn set_limit(&mut self, limit: u32) {
        self.limit = limit;
    }

    // ── Transitions ────────────────────────────────────────────────

    /// Start a fetch: bump the sequence counter, snapshot the buffered
    /// filters into a query, and enter `Loading`. A fetch already in
    /// flight keeps running, but its outcome is stale from here on.
    pub fn begin_fetch(&mut self) -> (u64, RecordQuery) {
        self.last_issued += 1;
        self.phase = Phase::Loading {
            seq: self.last_issued,
        };
        let query = RecordQuery::new(&self.email_filter, &self.domain_filter, self.limit);
        (self.last_issued, query)
    }

    /// Apply a fetch outcome. The only path that mutates the records.
    pub fn complete(
        &mut self,
        seq: u64,
        result: Result<Vec<CredentialRecord>, FetchError>,
    ) -> Completion {
        if seq != self.last_issued {
            return Completion::Stale;
        }
        self.phase = Phase::Idle;
        match result {
            Ok(records) => {
                let count = records.len();
                self.records = records;
                Completion::Replaced(count)
            }
            Err(err) => Completion::Failed(err.to_string()),
        }
    }

    // ── Accessors ──────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    pub fn records(&self) -> &[CredentialRecord] {
        &self.records
    }

    pub fn email_filter(&self) -> &str {
        &self.email_filter
    }

    pub fn domain_filter(&self) -> &str {
        &self.domain_filter
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}
