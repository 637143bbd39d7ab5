//! Transit query façade.
//!
//! The session asks a `TransitProvider` for departures or routes. The
//! provider itself is an external concern; this module defines the
//! interface, the result payloads, and a fixture-backed implementation.

mod error;
mod fixture;
mod provider;
mod types;

pub use error::TransitError;
pub use fixture::{FixtureData, FixtureTransit, RouteFixture};
pub use provider::TransitProvider;
pub use types::{
    Departure, DepartureBoard, DepartureState, Platform, Route, RouteLeg, RouteList,
};
