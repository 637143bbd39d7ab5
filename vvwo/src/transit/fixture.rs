//! Fixture-backed transit provider for development and testing.
//!
//! Loads departure boards and routes from a JSON file and serves them as
//! if they came from a live provider.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{DepartureQuery, RouteQuery};

use super::error::TransitError;
use super::provider::TransitProvider;
use super::types::{DepartureBoard, Route, RouteList};

/// Contents of a fixture file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureData {
    /// Boards, one per stop.
    #[serde(default)]
    pub departures: Vec<DepartureBoard>,

    /// Routes, one entry per (origin, destination) pair.
    #[serde(default)]
    pub routes: Vec<RouteFixture>,
}

/// Routes between one origin and destination.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteFixture {
    pub origin: String,
    pub destination: String,
    pub routes: Vec<Route>,
}

/// Transit provider that serves data from a fixture file.
///
/// Stop names match case-insensitively. Departures are filtered to the
/// query's allowed modes, as a live provider would.
#[derive(Clone)]
pub struct FixtureTransit {
    data: Arc<RwLock<FixtureData>>,
    calls: Arc<AtomicUsize>,
}

impl FixtureTransit {
    /// Load fixtures from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TransitError> {
        Ok(Self::from_data(read_fixture(path.as_ref())?))
    }

    /// Serve the given fixture data.
    pub fn from_data(data: FixtureData) -> Self {
        Self {
            data: Arc::new(RwLock::new(data)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Names of all stops with a departure board.
    pub async fn stop_names(&self) -> Vec<String> {
        let data = self.data.read().await;
        data.departures.iter().map(|b| b.stop_name.clone()).collect()
    }

    /// Number of provider calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Reload fixture data from disk (useful for development).
    ///
    /// On failure the current data is kept.
    pub async fn reload(&self, path: impl AsRef<Path>) -> Result<(), TransitError> {
        let fresh = read_fixture(path.as_ref())?;
        let mut data = self.data.write().await;
        *data = fresh;
        Ok(())
    }
}

impl TransitProvider for FixtureTransit {
    async fn find_departures(&self, query: &DepartureQuery) -> Result<DepartureBoard, TransitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let data = self.data.read().await;

        let board = data
            .departures
            .iter()
            .find(|b| same_stop(&b.stop_name, &query.stop_name))
            .ok_or_else(|| TransitError::StopNotFound(query.stop_name.clone()))?;

        let departures: Vec<_> = board
            .departures
            .iter()
            .filter(|d| query.allowed_modes.contains(&d.mode))
            .cloned()
            .collect();

        debug!(
            stop = %board.stop_name,
            total = board.departures.len(),
            kept = departures.len(),
            "served fixture departures"
        );

        Ok(DepartureBoard {
            stop_name: board.stop_name.clone(),
            departures,
        })
    }

    async fn find_route(&self, query: &RouteQuery) -> Result<RouteList, TransitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let data = self.data.read().await;

        data.routes
            .iter()
            .find(|r| {
                same_stop(&r.origin, &query.origin) && same_stop(&r.destination, &query.destination)
            })
            .map(|r| RouteList {
                routes: r.routes.clone(),
            })
            .ok_or_else(|| TransitError::NoRoute {
                origin: query.origin.clone(),
                destination: query.destination.clone(),
            })
    }
}

fn same_stop(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

fn read_fixture(path: &Path) -> Result<FixtureData, TransitError> {
    let json = std::fs::read_to_string(path).map_err(|e| TransitError::Fixture {
        message: format!("failed to read {}: {}", path.display(), e),
    })?;

    serde_json::from_str(&json).map_err(|e| TransitError::Fixture {
        message: format!("failed to parse {}: {}", path.display(), e),
    })
}
