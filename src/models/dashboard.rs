use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_orders: usize,
    pub pending_orders: usize,
    pub delivered_orders: usize,
    pub available_drivers: usize,
}
