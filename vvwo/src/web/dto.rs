//! Data transfer objects for web requests and responses.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::dispatch::SessionState;
use crate::domain::QueryResult;
use crate::transit::{Departure, DepartureBoard, DepartureState, Route, RouteLeg, RouteList};

/// Shown when the stored intent has no dispatch behaviour.
pub const UNSUPPORTED_MESSAGE: &str =
    "Sorry, diese Art Abfrage ist in dieser Demo noch nicht möglich.";

/// Request to parse and dispatch an utterance.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// Transcribed speech
    pub utterance: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// What the results screen should show.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultsView {
    /// Nothing parsed yet, or the last parse failed.
    Empty,

    /// A departure board for the parsed query.
    Departures {
        query: QueryView,
        stop_name: String,
        departures: Vec<DepartureRow>,
    },

    /// Route options for the parsed query.
    Routes {
        query: QueryView,
        routes: Vec<RouteRow>,
    },

    /// The query needs a transit answer that is not there, because the
    /// provider failed or the request is still in flight.
    NoResults { query: QueryView },

    /// The query parsed but has no dispatch behaviour.
    Unsupported { query: QueryView, message: String },
}

impl ResultsView {
    /// Build the view for the current session state.
    ///
    /// Responses take precedence. A stored query with no response is either
    /// unsupported or still waiting for its answer. Relative departure times
    /// are computed against `now`.
    pub fn from_state(state: &SessionState, now: NaiveDateTime) -> Self {
        let Some(query) = state.query.as_deref() else {
            return ResultsView::Empty;
        };
        let query_view = QueryView::from_result(query);

        if let Some(board) = state.departures.as_deref() {
            return Self::departures(query_view, board, now);
        }
        if let Some(routes) = state.routes.as_deref() {
            return Self::routes(query_view, routes);
        }

        if query.intent_kind().is_dispatchable() {
            ResultsView::NoResults { query: query_view }
        } else {
            ResultsView::Unsupported {
                query: query_view,
                message: UNSUPPORTED_MESSAGE.to_string(),
            }
        }
    }

    fn departures(query: QueryView, board: &DepartureBoard, now: NaiveDateTime) -> Self {
        ResultsView::Departures {
            query,
            stop_name: board.stop_name.clone(),
            departures: board
                .departures
                .iter()
                .map(|d| DepartureRow::from_departure(d, now))
                .collect(),
        }
    }

    fn routes(query: QueryView, list: &RouteList) -> Self {
        ResultsView::Routes {
            query,
            routes: list.routes.iter().map(RouteRow::from_route).collect(),
        }
    }
}

/// The parsed utterance, as echoed back to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryView {
    pub input_text: String,
    pub intent: String,
    pub confidence: f64,
}

impl QueryView {
    pub fn from_result(result: &QueryResult) -> Self {
        Self {
            input_text: result.input_text().to_string(),
            intent: result.intent_kind().to_string(),
            confidence: result.intent().confidence,
        }
    }
}

/// One line on a departure board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartureRow {
    pub line: String,
    pub direction: String,
    pub mode: String,

    /// Scheduled time (HH:MM)
    pub scheduled: String,

    /// Real-time estimate (HH:MM), only when it differs from scheduled
    pub expected: Option<String>,

    pub delay_mins: i64,

    /// Minutes until the expected departure; zero once it is due
    pub eta_mins: i64,

    /// Relative departure time, e.g. "in 5 Minuten"
    pub eta: String,

    pub platform: Option<String>,
    pub is_cancelled: bool,
}

impl DepartureRow {
    pub fn from_departure(departure: &Departure, now: NaiveDateTime) -> Self {
        let eta_mins = (departure.expected_time() - now).num_minutes().max(0);
        let expected = departure
            .real_time
            .filter(|rt| *rt != departure.scheduled_time)
            .map(|rt| format_time(&rt));

        Self {
            line: departure.line.clone(),
            direction: departure.direction.clone(),
            mode: departure.mode.to_string(),
            scheduled: format_time(&departure.scheduled_time),
            expected,
            delay_mins: departure.delay_minutes(),
            eta_mins,
            eta: eta_label(eta_mins),
            platform: departure.platform.as_ref().map(|p| p.label()),
            is_cancelled: departure.state == DepartureState::Cancelled,
        }
    }
}

/// One route option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteRow {
    /// Line and direction of the first vehicle, e.g. "7 Weixdorf"
    pub headline: Option<String>,
    pub duration_mins: u32,
    pub interchanges: String,
    pub price: Option<String>,
    pub legs: Vec<LegRow>,
}

impl RouteRow {
    pub fn from_route(route: &Route) -> Self {
        let headline = route.first_vehicle_leg().and_then(|leg| {
            match (leg.name.as_deref(), leg.direction.as_deref()) {
                (Some(name), Some(direction)) => Some(format!("{name} {direction}")),
                (Some(name), None) => Some(name.to_string()),
                (None, Some(direction)) => Some(direction.to_string()),
                (None, None) => None,
            }
        });

        Self {
            headline,
            duration_mins: route.duration_mins,
            interchanges: interchanges_label(route.interchanges),
            price: route.price.clone(),
            legs: route.legs.iter().map(LegRow::from_leg).collect(),
        }
    }
}

/// One leg of a route option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegRow {
    pub mode: Option<String>,
    pub name: Option<String>,
    pub direction: Option<String>,
    pub duration_mins: Option<u32>,
    pub is_footpath: bool,
}

impl LegRow {
    pub fn from_leg(leg: &RouteLeg) -> Self {
        Self {
            mode: leg.mode.as_ref().map(|m| m.to_string()),
            name: leg.name.clone(),
            direction: leg.direction.clone(),
            duration_mins: leg.duration_mins,
            is_footpath: leg.is_footpath(),
        }
    }
}

/// German label for the number of changes on a route.
pub fn interchanges_label(count: u32) -> String {
    match count {
        0 => "Kein Umstieg".to_string(),
        1 => "1 Umstieg".to_string(),
        n => format!("{n} Umstiege"),
    }
}

/// German label for minutes until departure.
pub fn eta_label(minutes: i64) -> String {
    match minutes {
        m if m <= 0 => "jetzt".to_string(),
        1 => "in 1 Minute".to_string(),
        m => format!("in {m} Minuten"),
    }
}

/// Format a time as HH:MM.
fn format_time(time: &NaiveDateTime) -> String {
    time.format("%H:%M").to_string()
}
