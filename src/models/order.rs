use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Assigned,
    InTransit,
    Delivered,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub customer_name: String,
    pub pickup_address: String,
    pub delivery_address: String,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<u64>,
    pub total_price: f64,
    pub items: u32,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields of a new order. Everything else is assigned by the store.
#[derive(Debug, Clone, Default)]
pub struct NewOrder {
    pub customer_name: String,
    pub pickup_address: String,
    pub delivery_address: String,
    pub total_price: f64,
}
