use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentEvent {
    pub order_id: u64,
    pub driver_id: u64,
    pub assigned_at: DateTime<Utc>,
}
