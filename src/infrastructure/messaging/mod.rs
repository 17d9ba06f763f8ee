// Messaging Infrastructure
//
// - broadcast_event_sink: in-memory, best-effort implementation of EventSink

pub mod broadcast_event_sink;

pub use broadcast_event_sink::BroadcastEventSink;
