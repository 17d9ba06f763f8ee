//! In-memory EventSink backed by a broadcast channel
//!
//! `broadcast::Sender::send` is synchronous and never blocks on backpressure;
//! it only fails when there are no receivers, which is a normal state, not
//! an error worth propagating to the pipeline.

use crate::interfaces::messaging::{EventSink, ScanEvent};
use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::trace;

const DEFAULT_CAPACITY: usize = 1024;

pub struct BroadcastEventSink {
    sender: broadcast::Sender<ScanEvent>,
}

impl BroadcastEventSink {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ScanEvent> {
        self.sender.subscribe()
    }
}

impl Default for BroadcastEventSink {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[async_trait]
impl EventSink for BroadcastEventSink {
    async fn publish(&self, event: ScanEvent) {
        if self.sender.send(event).is_err() {
            trace!("scan event published with no active subscribers");
        }
    }
}
