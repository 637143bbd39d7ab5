//! Intent classification types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The classified purpose of an utterance.
///
/// The NLU service labels intents with a namespace prefix
/// (e.g. `kiliankoe:Departure`). Only the segment after the last `:`
/// decides the kind; anything unrecognised is kept verbatim in
/// [`IntentKind::Unknown`] so it can be shown or logged unchanged.
///
/// # Examples
///
/// ```
/// use vvwo::domain::IntentKind;
///
/// assert_eq!(IntentKind::parse("kiliankoe:Departure"), IntentKind::Departure);
/// assert_eq!(IntentKind::parse("Route"), IntentKind::Route);
///
/// let other = IntentKind::parse("acme:Weather");
/// assert_eq!(other, IntentKind::Unknown("acme:Weather".to_string()));
/// assert_eq!(other.as_str(), "acme:Weather");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IntentKind {
    Search,
    Departure,
    Route,
    Reachability,
    Notification,
    Disruption,
    /// An intent label outside the known set, stored as received.
    Unknown(String),
}

impl IntentKind {
    /// Parse an intent label. Never fails.
    pub fn parse(label: &str) -> Self {
        let name = label.rsplit(':').next().unwrap_or(label);
        match name {
            "Search" => IntentKind::Search,
            "Departure" => IntentKind::Departure,
            "Route" => IntentKind::Route,
            "Reachability" => IntentKind::Reachability,
            "Notification" => IntentKind::Notification,
            "Disruption" => IntentKind::Disruption,
            _ => IntentKind::Unknown(label.to_string()),
        }
    }

    /// Returns the intent name (the raw label for unknown intents).
    pub fn as_str(&self) -> &str {
        match self {
            IntentKind::Search => "Search",
            IntentKind::Departure => "Departure",
            IntentKind::Route => "Route",
            IntentKind::Reachability => "Reachability",
            IntentKind::Notification => "Notification",
            IntentKind::Disruption => "Disruption",
            IntentKind::Unknown(label) => label,
        }
    }

    /// Returns true if this intent has dispatch behaviour.
    pub fn is_dispatchable(&self) -> bool {
        matches!(self, IntentKind::Departure | IntentKind::Route)
    }
}

impl From<String> for IntentKind {
    fn from(label: String) -> Self {
        IntentKind::parse(&label)
    }
}

impl From<IntentKind> for String {
    fn from(kind: IntentKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Debug for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntentKind::Unknown(label) => write!(f, "IntentKind::Unknown({label})"),
            known => write!(f, "IntentKind::{}", known.as_str()),
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An intent together with the classifier's confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub name: IntentKind,
    /// Classifier probability in `0.0..=1.0`.
    pub confidence: f64,
}

impl Intent {
    pub fn new(name: IntentKind, confidence: f64) -> Self {
        Self { name, confidence }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_namespaced_labels() {
        assert_eq!(IntentKind::parse("kiliankoe:Search"), IntentKind::Search);
        assert_eq!(
            IntentKind::parse("kiliankoe:Departure"),
            IntentKind::Departure
        );
        assert_eq!(IntentKind::parse("kiliankoe:Route"), IntentKind::Route);
        assert_eq!(
            IntentKind::parse("kiliankoe:Reachability"),
            IntentKind::Reachability
        );
        assert_eq!(
            IntentKind::parse("kiliankoe:Notification"),
            IntentKind::Notification
        );
        assert_eq!(
            IntentKind::parse("kiliankoe:Disruption"),
            IntentKind::Disruption
        );
    }

    #[test]
    fn parse_bare_labels() {
        assert_eq!(IntentKind::parse("Departure"), IntentKind::Departure);
        assert_eq!(IntentKind::parse("Route"), IntentKind::Route);
    }

    #[test]
    fn unknown_keeps_full_label() {
        let kind = IntentKind::parse("kiliankoe:Weather");
        assert_eq!(kind, IntentKind::Unknown("kiliankoe:Weather".to_string()));
        assert_eq!(kind.to_string(), "kiliankoe:Weather");
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(matches!(
            IntentKind::parse("kiliankoe:departure"),
            IntentKind::Unknown(_)
        ));
    }

    #[test]
    fn only_departure_and_route_dispatch() {
        assert!(IntentKind::Departure.is_dispatchable());
        assert!(IntentKind::Route.is_dispatchable());
        assert!(!IntentKind::Search.is_dispatchable());
        assert!(!IntentKind::Disruption.is_dispatchable());
        assert!(!IntentKind::Unknown("x".into()).is_dispatchable());
    }

    #[test]
    fn serde_uses_label_string() {
        let json = serde_json::to_string(&IntentKind::Route).unwrap();
        assert_eq!(json, "\"Route\"");

        let kind: IntentKind = serde_json::from_str("\"acme:Other\"").unwrap();
        assert_eq!(kind, IntentKind::Unknown("acme:Other".to_string()));
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", IntentKind::Route), "IntentKind::Route");
        assert_eq!(
            format!("{:?}", IntentKind::Unknown("x:Y".into())),
            "IntentKind::Unknown(x:Y)"
        );
    }
}
