//! Event Sink Implementations
//!
//! Provides concrete implementations of LifecycleEventSink:
//! - ConsoleEventSink: human-readable progress lines
//! - JsonEventSink: NDJSON output for automation

mod console;
mod json;

pub use console::{render_event, ConsoleEventSink};
pub use json::{event_to_json, JsonEventSink};
