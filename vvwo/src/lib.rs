//! Voice query demo server for Dresden public transport.
//!
//! Turns a spoken utterance into a structured query via a remote NLU
//! service, resolves it to a departure or route lookup, and keeps the
//! latest answer in a session for display.

pub mod config;
pub mod dispatch;
pub mod domain;
pub mod nlu;
pub mod transit;
pub mod web;
