//! NLU (natural-language understanding) client.
//!
//! This module provides an HTTP client for the query-parsing service,
//! which classifies an utterance into an intent and extracts slots.
//!
//! Key characteristics of the service:
//! - Requests are `POST /query` with a form-encoded `query` field
//! - Intent labels are namespaced (`kiliankoe:Departure`)
//! - Slot names may repeat; consumers take the first match

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{NluClient, NluConfig, QueryParser};
pub use convert::convert_query_response;
pub use error::NluError;
pub use mock::MockNluClient;
pub use types::{IntentDto, QueryResponse, RangeDto, SlotDto, SlotValueDto};
