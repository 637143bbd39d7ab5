//! Conversion from NLU response DTOs to domain types.

use crate::domain::{Intent, IntentKind, QueryResult, Slot, SlotSpan, SlotValue};

use super::types::{QueryResponse, SlotDto};

/// Convert a query response into a `QueryResult`.
///
/// Conversion cannot fail: unknown intent labels become
/// `IntentKind::Unknown` and slots are kept in response order.
pub fn convert_query_response(response: QueryResponse) -> QueryResult {
    let intent = Intent::new(
        IntentKind::parse(&response.intent.intent_name),
        response.intent.probability,
    );
    let slots = response.slots.into_iter().map(convert_slot).collect();
    QueryResult::new(response.input, intent, slots)
}

fn convert_slot(dto: SlotDto) -> Slot {
    Slot {
        name: dto.slot_name,
        entity: dto.entity,
        raw_value: dto.raw_value,
        value: SlotValue {
            kind: dto.value.kind,
            payload: dto.value.value,
        },
        span: SlotSpan {
            start: dto.range.start,
            end: dto.range.end,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(intent: &str, slots: &str) -> QueryResponse {
        let json = format!(
            r#"{{"input": "x", "intent": {{"intentName": "{intent}", "probability": 0.5}}, "slots": {slots}}}"#
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn converts_intent_and_slots() {
        let r = convert_query_response(response(
            "kiliankoe:Route",
            r#"[
                {"entity": "location", "range": {"start": 4, "end": 13}, "rawValue": "postplatz",
                 "slotName": "location_origin", "value": {"kind": "Custom", "value": "Postplatz"}},
                {"entity": "location", "range": {"start": 18, "end": 29}, "rawValue": "albertplatz",
                 "slotName": "location_destination", "value": {"kind": "Custom", "value": "Albertplatz"}}
            ]"#,
        ));

        assert_eq!(r.intent_kind(), &IntentKind::Route);
        assert_eq!(r.slots().len(), 2);
        assert_eq!(r.slots()[0].name, "location_origin");
        assert_eq!(r.slots()[0].raw_value, "postplatz");
        assert_eq!(r.slots()[0].value.payload, "Postplatz");
        assert_eq!(r.slots()[0].span, SlotSpan { start: 4, end: 13 });
        assert_eq!(r.slot("location_destination"), Some("Albertplatz"));
    }

    #[test]
    fn unknown_intent_is_kept() {
        let r = convert_query_response(response("kiliankoe:Weather", "[]"));
        assert_eq!(
            r.intent_kind(),
            &IntentKind::Unknown("kiliankoe:Weather".to_string())
        );
    }
}
