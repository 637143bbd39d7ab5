//! Intent resolution and dispatch.
//!
//! Turns a parsed utterance into at most one transit query and keeps the
//! per-session state (current query plus transit responses) that the
//! display layer reads.
//!
//! The pipeline is:
//! 1. `Session::parse` sends the utterance to a `QueryParser`
//! 2. `resolve` maps intent and slots to a `TransitQuery`
//! 3. `Session::dispatch` sends that query to a `TransitProvider`

mod config;
mod resolve;
mod session;

pub use config::DispatchConfig;
pub use resolve::{
    SLOT_DESTINATION, SLOT_LOCATION, SLOT_ORIGIN, SLOT_VEHICLE, resolve, resolve_departure,
    resolve_route,
};
pub use session::{DispatchOutcome, Session, SessionState};
