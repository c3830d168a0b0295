use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DriverStatus {
    Available,
    Busy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    pub id: u64,
    pub name: String,
    pub phone: String,
    pub vehicle: String,
    pub status: DriverStatus,
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_order_id: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct NewDriver {
    pub name: String,
    pub phone: String,
    pub vehicle: String,
}
