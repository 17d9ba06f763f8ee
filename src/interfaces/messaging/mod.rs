// Messaging Interfaces
//
// - event_sink: best-effort publication of typed scan lifecycle events

pub mod event_sink;

pub use event_sink::{EventSink, ScanEvent};
