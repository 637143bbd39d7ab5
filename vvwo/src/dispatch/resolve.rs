//! Intent resolution: from a parsed utterance to a transit query.

use tracing::trace;

use crate::domain::{DepartureQuery, IntentKind, QueryResult, RouteQuery, TransitQuery};

use super::config::DispatchConfig;

/// Slot holding the stop for departure queries.
pub const SLOT_LOCATION: &str = "location";

/// Slot holding the route origin.
pub const SLOT_ORIGIN: &str = "location_origin";

/// Slot holding the route destination.
pub const SLOT_DESTINATION: &str = "location_destination";

/// Slot holding the spoken vehicle filter.
pub const SLOT_VEHICLE: &str = "vehicle_type";

/// Turn a parsed utterance into a transit query.
///
/// Returns `None` for intents without dispatch behaviour; that is a normal
/// outcome, not an error.
pub fn resolve(result: &QueryResult, config: &DispatchConfig) -> Option<TransitQuery> {
    match result.intent_kind() {
        IntentKind::Departure => Some(TransitQuery::Departures(resolve_departure(result, config))),
        IntentKind::Route => Some(TransitQuery::Route(resolve_route(result, config))),
        other => {
            trace!(intent = %other, "intent has no dispatch behaviour");
            None
        }
    }
}

/// Departures at the named stop, or at the default stop for "here".
pub fn resolve_departure(result: &QueryResult, config: &DispatchConfig) -> DepartureQuery {
    let stop_name = here_or(result.slot_or(SLOT_LOCATION, &config.default_stop), config);
    let allowed_modes = config.modes_for(result.slot(SLOT_VEHICLE));
    DepartureQuery::new(stop_name, allowed_modes)
}

/// Route between the named places.
///
/// The origin treats "here" as the default stop. The destination treats
/// "home" as the home landmark and is otherwise taken literally.
pub fn resolve_route(result: &QueryResult, config: &DispatchConfig) -> RouteQuery {
    let origin = here_or(result.slot_or(SLOT_ORIGIN, &config.default_stop), config);

    let destination = result.slot_or(SLOT_DESTINATION, &config.default_stop);
    let destination = if config.is_home(destination) {
        config.home_landmark.as_str()
    } else {
        destination
    };

    RouteQuery::new(origin, destination)
}

fn here_or<'a>(location: &'a str, config: &'a DispatchConfig) -> &'a str {
    if config.is_here(location) {
        &config.default_stop
    } else {
        location
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Intent, Slot, TransportMode};

    fn query(intent: IntentKind, slots: &[(&str, &str)]) -> QueryResult {
        QueryResult::new(
            "test",
            Intent::new(intent, 0.9),
            slots.iter().map(|(n, v)| Slot::simple(*n, *v)).collect(),
        )
    }

    fn departure(result: &QueryResult) -> DepartureQuery {
        match resolve(result, &DispatchConfig::default()) {
            Some(TransitQuery::Departures(q)) => q,
            other => panic!("expected departure query, got {other:?}"),
        }
    }

    fn route(result: &QueryResult) -> RouteQuery {
        match resolve(result, &DispatchConfig::default()) {
            Some(TransitQuery::Route(q)) => q,
            other => panic!("expected route query, got {other:?}"),
        }
    }

    #[test]
    fn hauptbahnhof_example() {
        // "Bring mich zum Hauptbahnhof"
        let q = departure(&query(IntentKind::Departure, &[("location", "Hauptbahnhof")]));
        assert_eq!(q.stop_name, "Hauptbahnhof");
        assert_eq!(q.allowed_modes, TransportMode::all_known());
    }

    #[test]
    fn departure_here_uses_default_stop() {
        let q = departure(&query(IntentKind::Departure, &[("location", "hier")]));
        assert_eq!(q.stop_name, "Sächsische Staats- und Unibibliothek");
    }

    #[test]
    fn departure_without_location_uses_default_stop() {
        let q = departure(&query(IntentKind::Departure, &[]));
        assert_eq!(q.stop_name, "Sächsische Staats- und Unibibliothek");
    }

    #[test]
    fn departure_home_is_not_substituted() {
        let q = departure(&query(IntentKind::Departure, &[("location", "hause")]));
        assert_eq!(q.stop_name, "hause");
    }

    #[test]
    fn departure_tram_filter() {
        for word in ["tram", "Bahn", "STRAßENBAHN", "straßenbahn"] {
            let q = departure(&query(
                IntentKind::Departure,
                &[("location", "Postplatz"), ("vehicle_type", word)],
            ));
            assert_eq!(
                q.allowed_modes,
                [TransportMode::Tram].into_iter().collect(),
                "word {word}"
            );
        }
    }

    #[test]
    fn departure_bus_filter() {
        let q = departure(&query(
            IntentKind::Departure,
            &[("location", "Postplatz"), ("vehicle_type", "Bus")],
        ));
        assert_eq!(
            q.allowed_modes,
            [
                TransportMode::CityBus,
                TransportMode::IntercityBus,
                TransportMode::PlusBus
            ]
            .into_iter()
            .collect()
        );
    }

    #[test]
    fn departure_unknown_vehicle_allows_all() {
        let q = departure(&query(
            IntentKind::Departure,
            &[("location", "Postplatz"), ("vehicle_type", "Seilbahn")],
        ));
        assert_eq!(q.allowed_modes, TransportMode::all_known());
    }

    #[test]
    fn departure_first_location_wins() {
        let q = departure(&query(
            IntentKind::Departure,
            &[("location", "Postplatz"), ("location", "Albertplatz")],
        ));
        assert_eq!(q.stop_name, "Postplatz");
    }

    #[test]
    fn route_with_both_places() {
        let q = route(&query(
            IntentKind::Route,
            &[
                ("location_origin", "Postplatz"),
                ("location_destination", "Hauptbahnhof"),
            ],
        ));
        assert_eq!(q, RouteQuery::new("Postplatz", "Hauptbahnhof"));
    }

    #[test]
    fn route_origin_here_uses_default_stop() {
        let q = route(&query(
            IntentKind::Route,
            &[
                ("location_origin", "hier"),
                ("location_destination", "Hauptbahnhof"),
            ],
        ));
        assert_eq!(q.origin, "Sächsische Staats- und Unibibliothek");
    }

    #[test]
    fn route_destination_home_uses_landmark() {
        let q = route(&query(IntentKind::Route, &[("location_destination", "hause")]));
        assert_eq!(q.destination, "Albertplatz");
        assert_eq!(q.origin, "Sächsische Staats- und Unibibliothek");
    }

    #[test]
    fn route_destination_here_is_literal() {
        let q = route(&query(IntentKind::Route, &[("location_destination", "hier")]));
        assert_eq!(q.destination, "hier");
    }

    #[test]
    fn route_origin_home_is_literal() {
        let q = route(&query(IntentKind::Route, &[("location_origin", "hause")]));
        assert_eq!(q.origin, "hause");
    }

    #[test]
    fn route_missing_slots_use_default_stop() {
        let q = route(&query(IntentKind::Route, &[]));
        assert_eq!(q.origin, "Sächsische Staats- und Unibibliothek");
        assert_eq!(q.destination, "Sächsische Staats- und Unibibliothek");
    }

    #[test]
    fn other_intents_do_not_resolve() {
        let config = DispatchConfig::default();
        for intent in [
            IntentKind::Search,
            IntentKind::Reachability,
            IntentKind::Notification,
            IntentKind::Disruption,
            IntentKind::Unknown("acme:Weather".into()),
        ] {
            let r = query(intent, &[("location", "Postplatz")]);
            assert_eq!(resolve(&r, &config), None);
        }
    }

    #[test]
    fn configured_words_are_used() {
        let config = DispatchConfig::new("Main St", "City Hall")
            .with_here_token("here")
            .with_home_token("home");

        let r = query(
            IntentKind::Route,
            &[("location_origin", "here"), ("location_destination", "home")],
        );
        assert_eq!(resolve_route(&r, &config), RouteQuery::new("Main St", "City Hall"));
    }
}
