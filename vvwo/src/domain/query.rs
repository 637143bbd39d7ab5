//! Outbound transit query types.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use super::TransportMode;

/// Request for departures at a stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartureQuery {
    pub stop_name: String,
    /// Only departures with one of these modes are wanted.
    pub allowed_modes: BTreeSet<TransportMode>,
}

impl DepartureQuery {
    pub fn new(stop_name: impl Into<String>, allowed_modes: BTreeSet<TransportMode>) -> Self {
        Self {
            stop_name: stop_name.into(),
            allowed_modes,
        }
    }
}

/// Request for a route between two places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteQuery {
    pub origin: String,
    pub destination: String,
}

impl RouteQuery {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// A concrete query for the transit provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransitQuery {
    Departures(DepartureQuery),
    Route(RouteQuery),
}

impl fmt::Display for TransitQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitQuery::Departures(q) => {
                write!(f, "departures at {} (", q.stop_name)?;
                for (i, mode) in q.allowed_modes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{mode}")?;
                }
                f.write_str(")")
            }
            TransitQuery::Route(q) => write!(f, "route {} -> {}", q.origin, q.destination),
        }
    }
}
