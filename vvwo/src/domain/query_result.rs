//! Parsed utterance types.
//!
//! A `QueryResult` is what the NLU service tells us about one utterance:
//! the intent it detected and the slots (named arguments) it extracted.

use serde::Serialize;

use super::{Intent, IntentKind};

/// Character range of a slot within the utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotSpan {
    pub start: usize,
    pub end: usize,
}

/// Resolved value of a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotValue {
    /// Value kind as reported by the NLU service (e.g. "Custom").
    pub kind: String,
    pub payload: String,
}

/// A named argument extracted from an utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    /// Slot name, e.g. `location` or `vehicle_type`.
    pub name: String,
    /// Entity type the slot was matched against.
    pub entity: String,
    /// The text as it appeared in the utterance.
    pub raw_value: String,
    pub value: SlotValue,
    pub span: SlotSpan,
}

impl Slot {
    /// Create a slot whose raw value equals its payload.
    ///
    /// Handy for building results by hand; the span is left empty.
    pub fn simple(name: impl Into<String>, payload: impl Into<String>) -> Self {
        let name = name.into();
        let payload = payload.into();
        Self {
            entity: name.clone(),
            name,
            raw_value: payload.clone(),
            value: SlotValue {
                kind: "Custom".to_string(),
                payload,
            },
            span: SlotSpan { start: 0, end: 0 },
        }
    }
}

/// The structured interpretation of one utterance.
///
/// Immutable once constructed: fields are only reachable through
/// accessors. A new utterance produces a new `QueryResult`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    input_text: String,
    intent: Intent,
    slots: Vec<Slot>,
}

impl QueryResult {
    pub fn new(input_text: impl Into<String>, intent: Intent, slots: Vec<Slot>) -> Self {
        Self {
            input_text: input_text.into(),
            intent,
            slots,
        }
    }

    /// The utterance as the NLU service echoed it back.
    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn intent(&self) -> &Intent {
        &self.intent
    }

    pub fn intent_kind(&self) -> &IntentKind {
        &self.intent.name
    }

    /// Slots in the order the NLU service returned them.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Value of the first slot called `name`, if any.
    ///
    /// Slot names are not unique; later duplicates are ignored.
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.value.payload.as_str())
    }

    /// Value of the first slot called `name`, or `default` if there is none.
    pub fn slot_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.slot(name).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(slots: Vec<Slot>) -> QueryResult {
        QueryResult::new(
            "test",
            Intent::new(IntentKind::Departure, 0.9),
            slots,
        )
    }

    #[test]
    fn slot_found() {
        let r = result(vec![Slot::simple("location", "Hauptbahnhof")]);
        assert_eq!(r.slot("location"), Some("Hauptbahnhof"));
    }

    #[test]
    fn slot_missing() {
        let r = result(vec![Slot::simple("location", "Hauptbahnhof")]);
        assert_eq!(r.slot("vehicle_type"), None);
        assert_eq!(r.slot_or("vehicle_type", "fallback"), "fallback");
    }

    #[test]
    fn first_duplicate_wins() {
        let r = result(vec![
            Slot::simple("location", "Postplatz"),
            Slot::simple("vehicle_type", "Bus"),
            Slot::simple("location", "Albertplatz"),
        ]);
        assert_eq!(r.slot("location"), Some("Postplatz"));
    }

    #[test]
    fn lookup_uses_value_not_raw_value() {
        let mut slot = Slot::simple("location", "Hauptbahnhof");
        slot.raw_value = "hauptbahnhof".to_string();
        let r = result(vec![slot]);
        assert_eq!(r.slot("location"), Some("Hauptbahnhof"));
    }

    #[test]
    fn slot_name_match_is_exact() {
        let r = result(vec![Slot::simple("Location", "Postplatz")]);
        assert_eq!(r.slot("location"), None);
    }

    #[test]
    fn accessors() {
        let r = result(vec![]);
        assert_eq!(r.input_text(), "test");
        assert_eq!(r.intent_kind(), &IntentKind::Departure);
        assert!(r.slots().is_empty());
        assert!((r.intent().confidence - 0.9).abs() < f64::EPSILON);
    }
}
