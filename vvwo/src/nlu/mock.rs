//! Mock NLU parser for testing without the remote service.
//!
//! Serves canned `QueryResult`s keyed by utterance.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::QueryResult;

use super::client::QueryParser;
use super::error::NluError;

/// In-memory parser with canned answers.
///
/// Utterances without a canned answer fail with a 404-style `Api` error,
/// which the session treats like any other network failure.
#[derive(Debug, Clone, Default)]
pub struct MockNluClient {
    responses: Arc<HashMap<String, QueryResult>>,
    calls: Arc<AtomicUsize>,
}

impl MockNluClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canned answer for an utterance.
    pub fn with_response(mut self, utterance: impl Into<String>, result: QueryResult) -> Self {
        Arc::make_mut(&mut self.responses).insert(utterance.into(), result);
        self
    }

    /// Number of `parse` calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl QueryParser for MockNluClient {
    async fn parse(&self, utterance: &str) -> Result<QueryResult, NluError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .get(utterance)
            .cloned()
            .ok_or_else(|| NluError::Api {
                status: 404,
                message: format!("no mock response for {utterance:?}"),
            })
    }
}
