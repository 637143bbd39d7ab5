//! NLU query endpoint response DTOs.
//!
//! These types map directly to the JSON returned by `POST /query`.

use serde::Deserialize;

/// Response from `POST /query`.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    /// The utterance as the service received it.
    pub input: String,

    /// Detected intent.
    pub intent: IntentDto,

    /// Extracted slots, in utterance order.
    pub slots: Vec<SlotDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentDto {
    /// Namespaced intent label, e.g. `kiliankoe:Departure`.
    pub intent_name: String,

    pub probability: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotDto {
    pub entity: String,
    pub range: RangeDto,
    pub raw_value: String,
    pub slot_name: String,
    pub value: SlotValueDto,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RangeDto {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotValueDto {
    pub kind: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_query_response() {
        let json = r#"{
            "input": "Bring mich zum Hauptbahnhof",
            "intent": {"intentName": "kiliankoe:Departure", "probability": 0.87},
            "slots": [{
                "entity": "location",
                "range": {"start": 15, "end": 27},
                "rawValue": "Hauptbahnhof",
                "slotName": "location",
                "value": {"kind": "Custom", "value": "Hauptbahnhof"}
            }]
        }"#;

        let response: QueryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.input, "Bring mich zum Hauptbahnhof");
        assert_eq!(response.intent.intent_name, "kiliankoe:Departure");
        assert_eq!(response.slots.len(), 1);
        assert_eq!(response.slots[0].slot_name, "location");
        assert_eq!(response.slots[0].range.end, 27);
        assert_eq!(response.slots[0].value.value, "Hauptbahnhof");
    }

    #[test]
    fn missing_slots_is_an_error() {
        let json = r#"{
            "input": "hallo",
            "intent": {"intentName": "kiliankoe:Search", "probability": 0.2}
        }"#;
        assert!(serde_json::from_str::<QueryResponse>(json).is_err());
    }
}
