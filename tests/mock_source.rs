//! Integration tests driving the browse session against a mock source.
//!
//! Validates the session end-to-end without making real HTTP calls by
//! substituting a mock implementation of CredentialSource.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pretty_assertions::assert_eq;

use credview::client::{CredentialSource, FetchError};
use credview::models::{CredentialRecord, RecordQuery};
use credview::view::{BrowseSession, FetchOutcome, SessionControl};

/// A source that serves canned responses in call order and records the
/// queries it was asked.
struct MockSource {
    responses: Mutex<VecDeque<Result<Vec<CredentialRecord>, String>>>,
    queries: Mutex<Vec<RecordQuery>>,
}

impl MockSource {
    fn new(responses: Vec<Result<Vec<CredentialRecord>, String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            queries: Mutex::new(Vec::new()),
        }
    }

    fn seen_queries(&self) -> Vec<RecordQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl CredentialSource for MockSource {
    async fn fetch(&self, query: &RecordQuery) -> Result<Vec<CredentialRecord>, FetchError> {
        self.queries.lock().unwrap().push(query.clone());
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(records)) => Ok(records),
            Some(Err(reason)) => Err(FetchError::new(reason)),
            None => Ok(Vec::new()),
        }
    }
}

/// Helper: build a test record.
fn record(id: &str, email: &str, domain: &str) -> CredentialRecord {
    CredentialRecord {
        id: id.to_string(),
        email: email.to_string(),
        username: email.split('@').next().unwrap_or("").to_string(),
        domain: domain.to_string(),
        password: "hunter2".to_string(),
    }
}

/// Drive one apply-and-complete cycle on the session.
async fn settle(session: &mut BrowseSession) {
    let outcome = session
        .next_outcome()
        .await
        .expect("fetch task should deliver an outcome");
    session.handle_outcome(outcome);
}

#[tokio::test]
async fn mount_fetch_displays_all_records() {
    let source = Arc::new(MockSource::new(vec![Ok(vec![
        record("1", "a@acme.example", "acme.example"),
        record("2", "b@other.example", "other.example"),
    ])]));
    let mut session = BrowseSession::new(Arc::clone(&source) as Arc<dyn CredentialSource>, 4000, false);

    // The unfiltered fetch issued on session start.
    session.apply();
    settle(&mut session).await;

    assert_eq!(session.state().records().len(), 2);
    assert_eq!(session.state().records()[0].id, "1");
    assert_eq!(session.state().records()[1].id, "2");
    assert!(!session.state().is_loading());

    let queries = source.seen_queries();
    assert_eq!(queries, vec![RecordQuery::unfiltered()]);
}

#[tokio::test]
async fn domain_filter_scenario_retains_buffered_text() {
    let source = Arc::new(MockSource::new(vec![
        Ok(vec![
            record("1", "a@acme.example", "acme.example"),
            record("2", "b@other.example", "other.example"),
        ]),
        Ok(vec![record("1", "a@acme.example", "acme.example")]),
    ]));
    let mut session = BrowseSession::new(Arc::clone(&source) as Arc<dyn CredentialSource>, 4000, false);

    session.apply();
    settle(&mut session).await;
    assert_eq!(session.state().records().len(), 2);

    // The user types a domain filter, then applies it.
    assert_eq!(session.handle_command("domain acme"), SessionControl::Continue);
    assert_eq!(session.handle_command("apply"), SessionControl::Continue);
    settle(&mut session).await;

    assert_eq!(session.state().records().len(), 1);
    assert_eq!(session.state().records()[0].domain, "acme.example");
    // Buffered filter text survives the apply.
    assert_eq!(session.state().domain_filter(), "acme");
    assert_eq!(session.state().email_filter(), "");

    let queries = source.seen_queries();
    assert_eq!(queries[1], RecordQuery::new("", "acme", 4000));
}

#[tokio::test]
async fn failing_fetch_preserves_previous_collection() {
    let source = Arc::new(MockSource::new(vec![
        Ok(vec![
            record("1", "a@acme.example", "acme.example"),
            record("2", "b@other.example", "other.example"),
        ]),
        Err("endpoint returned HTTP 500 Internal Server Error".to_string()),
    ]));
    let mut session = BrowseSession::new(Arc::clone(&source) as Arc<dyn CredentialSource>, 4000, false);

    session.apply();
    settle(&mut session).await;

    session.handle_command("email nobody");
    session.handle_command("apply");
    settle(&mut session).await;

    // Stale-but-consistent: the grid still shows the last success.
    assert_eq!(session.state().records().len(), 2);
    assert!(!session.state().is_loading());
    // The buffered filter is untouched by the failure too.
    assert_eq!(session.state().email_filter(), "nobody");
}

#[tokio::test]
async fn repeated_identical_applies_are_idempotent() {
    let canned = vec![
        record("1", "a@acme.example", "acme.example"),
        record("2", "b@acme.example", "acme.example"),
    ];
    let source = Arc::new(MockSource::new(vec![Ok(canned.clone()), Ok(canned)]));
    let mut session = BrowseSession::new(Arc::clone(&source) as Arc<dyn CredentialSource>, 4000, false);

    session.handle_command("domain acme");
    session.handle_command("apply");
    settle(&mut session).await;
    let first: Vec<String> = session
        .state()
        .records()
        .iter()
        .map(|r| r.id.clone())
        .collect();

    session.handle_command("apply");
    settle(&mut session).await;
    let second: Vec<String> = session
        .state()
        .records()
        .iter()
        .map(|r| r.id.clone())
        .collect();

    assert_eq!(first, second);
    let queries = source.seen_queries();
    assert_eq!(queries[0], queries[1]);
}

#[tokio::test]
async fn superseded_outcome_is_discarded() {
    let source = Arc::new(MockSource::new(vec![
        Ok(vec![record("old", "a@acme.example", "acme.example")]),
        Ok(vec![record("new", "b@other.example", "other.example")]),
    ]));
    let mut session = BrowseSession::new(Arc::clone(&source) as Arc<dyn CredentialSource>, 4000, false);

    // First fetch resolves but is not handled before a second one starts.
    session.apply();
    let slow = session.next_outcome().await.expect("first outcome");

    session.handle_command("apply");
    let fast = session.next_outcome().await.expect("second outcome");

    // The newer fetch resolves first; the slow one arrives afterwards.
    session.handle_outcome(fast);
    session.handle_outcome(slow);

    assert_eq!(session.state().records().len(), 1);
    assert_eq!(session.state().records()[0].id, "new");
    assert!(!session.state().is_loading());
}

#[tokio::test]
async fn quit_ends_the_command_loop() {
    let source = Arc::new(MockSource::new(vec![]));
    let mut session = BrowseSession::new(source as Arc<dyn CredentialSource>, 4000, false);

    assert_eq!(session.handle_command("quit"), SessionControl::Quit);
    assert_eq!(session.handle_command("exit"), SessionControl::Quit);
    assert_eq!(session.handle_command("bogus"), SessionControl::Continue);
    assert_eq!(session.handle_command(""), SessionControl::Continue);
}

#[tokio::test]
async fn limit_command_validates_input() {
    let source = Arc::new(MockSource::new(vec![]));
    let mut session = BrowseSession::new(source as Arc<dyn CredentialSource>, 4000, false);

    session.handle_command("limit 25");
    assert_eq!(session.state().limit(), 25);

    // Rejected values leave the buffered limit alone.
    session.handle_command("limit 0");
    assert_eq!(session.state().limit(), 25);
    session.handle_command("limit many");
    assert_eq!(session.state().limit(), 25);
}

#[tokio::test]
async fn manually_tagged_stale_outcome_is_ignored() {
    let source = Arc::new(MockSource::new(vec![Ok(vec![record(
        "1",
        "a@acme.example",
        "acme.example",
    )])]));
    let mut session = BrowseSession::new(source as Arc<dyn CredentialSource>, 4000, false);

    session.apply();
    settle(&mut session).await;

    // An outcome from a sequence number that was never the latest.
    session.handle_outcome(FetchOutcome {
        seq: 99,
        result: Ok(Vec::new()),
    });
    assert_eq!(session.state().records().len(), 1);
}
