//! Per-interaction session state.
//!
//! A `Session` owns the current `QueryResult` and at most one transit
//! response of each kind. All updates go through one async lock, so
//! observers always see a consistent snapshot.
//!
//! Every `parse` and `dispatch` takes a fresh sequence number. A completion
//! is applied only if its number is still the latest issued, so a slow
//! response can never overwrite the answer to a newer request.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::domain::{IntentKind, QueryResult, TransitQuery};
use crate::nlu::QueryParser;
use crate::transit::{DepartureBoard, RouteList, TransitError, TransitProvider};

use super::config::DispatchConfig;
use super::resolve::resolve;

/// What the session currently knows.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// The latest parsed utterance.
    pub query: Option<Arc<QueryResult>>,

    /// Departures for the latest departure query.
    pub departures: Option<Arc<DepartureBoard>>,

    /// Routes for the latest route query.
    pub routes: Option<Arc<RouteList>>,
}

/// Result of a dispatch attempt.
///
/// None of these are errors from the caller's point of view: every path
/// leaves the session in a displayable state.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// No query is stored; nothing was sent.
    NoQuery,

    /// The intent has no dispatch behaviour; nothing was sent.
    Unsupported(IntentKind),

    /// The transit provider answered and the response is stored.
    Completed(TransitQuery),

    /// The transit provider failed; the response stays absent.
    Failed {
        query: TransitQuery,
        error: TransitError,
    },

    /// A newer request started while this one was in flight; its
    /// response was dropped.
    Superseded(TransitQuery),
}

struct Inner {
    state: SessionState,
    parse_seq: u64,
    dispatch_seq: u64,
}

/// One user's voice query session.
///
/// Construct one per interaction and share it by reference (or `Arc`)
/// with the layer that displays results.
pub struct Session<P, T> {
    parser: P,
    transit: T,
    config: DispatchConfig,
    inner: RwLock<Inner>,
}

impl<P: QueryParser, T: TransitProvider> Session<P, T> {
    /// Create an empty session.
    pub fn new(parser: P, transit: T, config: DispatchConfig) -> Self {
        Self {
            parser,
            transit,
            config,
            inner: RwLock::new(Inner {
                state: SessionState::default(),
                parse_seq: 0,
                dispatch_seq: 0,
            }),
        }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    pub fn transit(&self) -> &T {
        &self.transit
    }

    /// A copy of the current state.
    pub async fn snapshot(&self) -> SessionState {
        self.inner.read().await.state.clone()
    }

    /// Parse an utterance and store the result.
    ///
    /// A new result replaces the whole session state, including any
    /// transit responses for the previous query. A failed parse clears the
    /// state and is logged; it is not returned as an error.
    ///
    /// Returns the stored result, or `None` if parsing failed or a newer
    /// parse was started while this one was in flight.
    pub async fn parse(&self, utterance: &str) -> Option<Arc<QueryResult>> {
        let seq = {
            let mut inner = self.inner.write().await;
            inner.parse_seq += 1;
            inner.parse_seq
        };

        let outcome = self.parser.parse(utterance).await;

        let mut inner = self.inner.write().await;
        if inner.parse_seq != seq {
            debug!(seq, latest = inner.parse_seq, "dropping superseded parse result");
            return None;
        }

        // Anything dispatched for the old query is now stale.
        inner.dispatch_seq += 1;
        inner.state = SessionState::default();

        match outcome {
            Ok(result) => {
                info!(
                    seq,
                    intent = %result.intent_kind(),
                    confidence = result.intent().confidence,
                    slots = result.slots().len(),
                    "parsed utterance"
                );
                let result = Arc::new(result);
                inner.state.query = Some(Arc::clone(&result));
                Some(result)
            }
            Err(error) => {
                warn!(seq, %error, "failed to parse utterance");
                None
            }
        }
    }

    /// Send the transit query for the stored `QueryResult`.
    ///
    /// Stored transit responses are cleared before anything is sent, so a
    /// re-dispatch never shows stale data. Does nothing if no query is
    /// stored.
    pub async fn dispatch(&self) -> DispatchOutcome {
        let (seq, result) = {
            let mut inner = self.inner.write().await;
            let Some(result) = inner.state.query.clone() else {
                return DispatchOutcome::NoQuery;
            };
            inner.state.departures = None;
            inner.state.routes = None;
            inner.dispatch_seq += 1;
            (inner.dispatch_seq, result)
        };

        let Some(query) = resolve(&result, &self.config) else {
            info!(intent = %result.intent_kind(), "intent not supported, nothing dispatched");
            return DispatchOutcome::Unsupported(result.intent_kind().clone());
        };

        debug!(seq, %query, "dispatching transit query");

        match query {
            TransitQuery::Departures(q) => {
                let response = self.transit.find_departures(&q).await;
                let query = TransitQuery::Departures(q);
                self.complete(seq, query, response, |state, board| {
                    state.departures = Some(Arc::new(board));
                })
                .await
            }
            TransitQuery::Route(q) => {
                let response = self.transit.find_route(&q).await;
                let query = TransitQuery::Route(q);
                self.complete(seq, query, response, |state, routes| {
                    state.routes = Some(Arc::new(routes));
                })
                .await
            }
        }
    }

    /// Parse an utterance, then dispatch it if parsing succeeded.
    pub async fn ask(&self, utterance: &str) -> DispatchOutcome {
        match self.parse(utterance).await {
            Some(_) => self.dispatch().await,
            None => DispatchOutcome::NoQuery,
        }
    }

    /// Forget the current query and responses.
    ///
    /// In-flight requests are invalidated and will not be applied.
    pub async fn reset(&self) {
        let mut inner = self.inner.write().await;
        inner.parse_seq += 1;
        inner.dispatch_seq += 1;
        inner.state = SessionState::default();
        debug!("session reset");
    }

    async fn complete<R>(
        &self,
        seq: u64,
        query: TransitQuery,
        response: Result<R, TransitError>,
        store: impl FnOnce(&mut SessionState, R),
    ) -> DispatchOutcome {
        let mut inner = self.inner.write().await;
        if inner.dispatch_seq != seq {
            debug!(seq, latest = inner.dispatch_seq, %query, "dropping superseded transit response");
            return DispatchOutcome::Superseded(query);
        }

        match response {
            Ok(payload) => {
                store(&mut inner.state, payload);
                info!(seq, %query, "stored transit response");
                DispatchOutcome::Completed(query)
            }
            Err(error) => {
                warn!(seq, %query, %error, "transit query failed");
                DispatchOutcome::Failed { query, error }
            }
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
