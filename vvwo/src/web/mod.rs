//! Web layer for the voice query demo.
//!
//! Exposes the session over a small JSON API: ask an utterance, read the
//! current results view, reset.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
