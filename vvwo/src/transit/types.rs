//! Transit provider result types.
//!
//! These are the payloads a `TransitProvider` returns. They deserialize
//! from the fixture format and serialize for the web layer, so they use
//! `Option` wherever a provider may omit a field.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::TransportMode;

/// Departures at one stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartureBoard {
    /// Stop name as the provider resolved it.
    pub stop_name: String,
    pub departures: Vec<Departure>,
}

/// A single departure on a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Departure {
    /// Line label, e.g. "11" or "S1".
    pub line: String,
    /// Final destination shown on the vehicle.
    pub direction: String,
    pub mode: TransportMode,
    pub scheduled_time: NaiveDateTime,
    /// Real-time estimate, if the provider has one.
    #[serde(default)]
    pub real_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub platform: Option<Platform>,
    #[serde(default)]
    pub state: DepartureState,
}

impl Departure {
    /// Best available departure time.
    pub fn expected_time(&self) -> NaiveDateTime {
        self.real_time.unwrap_or(self.scheduled_time)
    }

    /// Minutes behind schedule; zero when on time or early.
    pub fn delay_minutes(&self) -> i64 {
        self.real_time
            .map(|rt| (rt - self.scheduled_time).num_minutes().max(0))
            .unwrap_or(0)
    }
}

/// Where a departure leaves from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    /// Provider platform type, e.g. "Platform" or "Railtrack".
    pub kind: String,
    pub name: String,
}

impl Platform {
    /// Human-readable German label.
    ///
    /// Bus and tram platforms are "Steig", rail tracks are "Gleis" (with the
    /// provider's "Gl." prefix removed).
    pub fn label(&self) -> String {
        match self.kind.as_str() {
            "Platform" => format!("Steig {}", self.name),
            "Railtrack" => format!("Gleis {}", self.name.replace("Gl.", "").trim()),
            _ => format!("{} {}", self.kind, self.name),
        }
    }
}

/// Real-time status of a departure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepartureState {
    OnTime,
    Delayed,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Candidate routes between two places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteList {
    pub routes: Vec<Route>,
}

/// One way of getting from origin to destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub route_id: u32,
    pub duration_mins: u32,
    pub interchanges: u32,
    /// Fare as displayed by the provider, e.g. "2,50".
    #[serde(default)]
    pub price: Option<String>,
    pub legs: Vec<RouteLeg>,
}

impl Route {
    /// The first leg that is not a footpath.
    pub fn first_vehicle_leg(&self) -> Option<&RouteLeg> {
        self.legs.iter().find(|leg| !leg.is_footpath())
    }
}

/// A part of a route travelled with a single mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    #[serde(default)]
    pub mode: Option<TransportMode>,
    /// Line name, e.g. "7".
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub duration_mins: Option<u32>,
}

impl RouteLeg {
    /// Walking legs are reported with the unknown mode "Footpath".
    pub fn is_footpath(&self) -> bool {
        matches!(&self.mode, Some(TransportMode::Unknown(label)) if label.eq_ignore_ascii_case("footpath"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn departure(real_time: Option<NaiveDateTime>) -> Departure {
        Departure {
            line: "11".into(),
            direction: "Bühlau".into(),
            mode: TransportMode::Tram,
            scheduled_time: at(10, 0),
            real_time,
            platform: None,
            state: DepartureState::OnTime,
        }
    }

    #[test]
    fn delay_minutes() {
        assert_eq!(departure(None).delay_minutes(), 0);
        assert_eq!(departure(Some(at(10, 4))).delay_minutes(), 4);
        assert_eq!(departure(Some(at(9, 58))).delay_minutes(), 0);
    }

    #[test]
    fn expected_time_prefers_real_time() {
        assert_eq!(departure(None).expected_time(), at(10, 0));
        assert_eq!(departure(Some(at(10, 3))).expected_time(), at(10, 3));
    }

    #[test]
    fn platform_labels() {
        let steig = Platform {
            kind: "Platform".into(),
            name: "3".into(),
        };
        assert_eq!(steig.label(), "Steig 3");

        let gleis = Platform {
            kind: "Railtrack".into(),
            name: "Gl. 12".into(),
        };
        assert_eq!(gleis.label(), "Gleis 12");

        let other = Platform {
            kind: "Pier".into(),
            name: "A".into(),
        };
        assert_eq!(other.label(), "Pier A");
    }

    #[test]
    fn first_vehicle_leg_skips_footpaths() {
        let route = Route {
            route_id: 1,
            duration_mins: 20,
            interchanges: 0,
            price: None,
            legs: vec![
                RouteLeg {
                    mode: Some(TransportMode::Unknown("Footpath".into())),
                    name: None,
                    direction: None,
                    duration_mins: Some(3),
                },
                RouteLeg {
                    mode: Some(TransportMode::Tram),
                    name: Some("7".into()),
                    direction: Some("Weixdorf".into()),
                    duration_mins: Some(17),
                },
            ],
        };
        assert_eq!(route.first_vehicle_leg().unwrap().name.as_deref(), Some("7"));
    }

    #[test]
    fn unknown_state_from_new_label() {
        let state: DepartureState = serde_json::from_str("\"rerouted\"").unwrap();
        assert_eq!(state, DepartureState::Unknown);
    }

    #[test]
    fn deserialize_departure_with_defaults() {
        let json = r#"{
            "line": "62",
            "direction": "Löbtau",
            "mode": "CityBus",
            "scheduled_time": "2024-03-15T10:00:00"
        }"#;
        let d: Departure = serde_json::from_str(json).unwrap();
        assert_eq!(d.mode, TransportMode::CityBus);
        assert_eq!(d.real_time, None);
        assert_eq!(d.platform, None);
        assert_eq!(d.state, DepartureState::Unknown);
    }
}
