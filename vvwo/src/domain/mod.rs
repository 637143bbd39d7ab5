//! Domain types for the voice transit query service.
//!
//! This module holds the parsed-utterance model (intents and slots),
//! transport modes, and the queries sent to the transit provider.

mod intent;
mod mode;
mod query;
mod query_result;

pub use intent::{Intent, IntentKind};
pub use mode::TransportMode;
pub use query::{DepartureQuery, RouteQuery, TransitQuery};
pub use query_result::{QueryResult, Slot, SlotSpan, SlotValue};
