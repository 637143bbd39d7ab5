//! Transit provider trait.

use std::future::Future;

use crate::domain::{DepartureQuery, RouteQuery};

use super::error::TransitError;
use super::types::{DepartureBoard, RouteList};

/// Source of departure and route data.
///
/// The session depends only on this trait; a real transit-data library
/// or service sits behind it in production, fixtures in development.
pub trait TransitProvider {
    /// Departures at `query.stop_name`, restricted to `query.allowed_modes`.
    fn find_departures(
        &self,
        query: &DepartureQuery,
    ) -> impl Future<Output = Result<DepartureBoard, TransitError>> + Send;

    /// Routes from `query.origin` to `query.destination`.
    fn find_route(
        &self,
        query: &RouteQuery,
    ) -> impl Future<Output = Result<RouteList, TransitError>> + Send;
}
