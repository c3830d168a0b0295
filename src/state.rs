use tokio::sync::{RwLock, broadcast};

use crate::models::assignment::AssignmentEvent;
use crate::observability::metrics::Metrics;
use crate::store::DispatchStore;

pub struct AppState {
    pub store: RwLock<DispatchStore>,
    pub assignment_events_tx: broadcast::Sender<AssignmentEvent>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(store: DispatchStore, event_buffer_size: usize) -> Self {
        let (assignment_events_tx, _unused_rx) = broadcast::channel(event_buffer_size.max(1));

        Self {
            store: RwLock::new(store),
            assignment_events_tx,
            metrics: Metrics::new(),
        }
    }
}
