use crate::models::dashboard::DashboardSummary;
use crate::models::driver::DriverStatus;
use crate::models::order::OrderStatus;
use crate::store::DispatchStore;

impl DispatchStore {
    /// Recomputed from the live collections on every call.
    pub fn summary(&self) -> DashboardSummary {
        let count_orders = |status: OrderStatus| {
            self.orders
                .iter()
                .filter(|order| order.status == status)
                .count()
        };

        DashboardSummary {
            total_orders: self.orders.len(),
            pending_orders: count_orders(OrderStatus::Pending),
            delivered_orders: count_orders(OrderStatus::Delivered),
            available_drivers: self
                .drivers
                .iter()
                .filter(|driver| driver.status == DriverStatus::Available)
                .count(),
        }
    }
}
