//! Application state for the web layer.

use std::sync::Arc;

use crate::dispatch::Session;

/// Shared application state.
///
/// Holds the one session the server talks to.
pub struct AppState<P, T> {
    pub session: Arc<Session<P, T>>,
}

impl<P, T> AppState<P, T> {
    /// Create a new app state.
    pub fn new(session: Session<P, T>) -> Self {
        Self {
            session: Arc::new(session),
        }
    }
}

// Manual impl: the parser and provider need not be `Clone`.
impl<P, T> Clone for AppState<P, T> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
        }
    }
}
