//! In-memory dispatch state: orders, drivers and their id counters.
//!
//! The store is a plain struct with no interior locking. `AppState` wraps it
//! in a `RwLock`, so every method here runs against exclusive or shared
//! access and an assignment touches both records under one guard.

pub mod seed;
pub mod summary;

use chrono::Utc;
use thiserror::Error;

use crate::models::assignment::AssignmentEvent;
use crate::models::driver::{Driver, DriverStatus, NewDriver};
use crate::models::order::{NewOrder, Order, OrderStatus};

pub const DEFAULT_DRIVER_RATING: f64 = 5.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("order {0} not found")]
    OrderNotFound(u64),

    #[error("driver {0} not found")]
    DriverNotFound(u64),
}

#[derive(Debug)]
pub struct DispatchStore {
    orders: Vec<Order>,
    drivers: Vec<Driver>,
    next_order_id: u64,
    next_driver_id: u64,
}

impl Default for DispatchStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchStore {
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            drivers: Vec::new(),
            next_order_id: 1,
            next_driver_id: 1,
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn get_order(&self, id: u64) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    pub fn get_driver(&self, id: u64) -> Option<&Driver> {
        self.drivers.iter().find(|driver| driver.id == id)
    }

    pub fn create_order(&mut self, new: NewOrder) -> Order {
        let order = Order {
            id: self.take_order_id(),
            customer_name: new.customer_name,
            pickup_address: new.pickup_address,
            delivery_address: new.delivery_address,
            status: OrderStatus::Pending,
            driver_id: None,
            total_price: new.total_price.max(0.0),
            items: 1,
            created_at: Utc::now(),
        };

        self.orders.push(order.clone());
        order
    }

    pub fn register_driver(&mut self, new: NewDriver) -> Driver {
        let driver = Driver {
            id: self.take_driver_id(),
            name: new.name,
            phone: new.phone,
            vehicle: new.vehicle,
            status: DriverStatus::Available,
            rating: DEFAULT_DRIVER_RATING,
            active_order_id: None,
        };

        self.drivers.push(driver.clone());
        driver
    }

    /// Links `driver_id` to `order_id` and marks both sides.
    ///
    /// Both lookups happen before anything is written, so a miss on either
    /// side leaves the store untouched. The driver's current status is not
    /// checked: a busy driver is moved to the new order.
    pub fn assign_driver(
        &mut self,
        order_id: u64,
        driver_id: u64,
    ) -> Result<AssignmentEvent, StoreError> {
        let order_idx = self
            .orders
            .iter()
            .position(|order| order.id == order_id)
            .ok_or(StoreError::OrderNotFound(order_id))?;
        let driver_idx = self
            .drivers
            .iter()
            .position(|driver| driver.id == driver_id)
            .ok_or(StoreError::DriverNotFound(driver_id))?;

        let order = &mut self.orders[order_idx];
        order.status = OrderStatus::Assigned;
        order.driver_id = Some(driver_id);

        let driver = &mut self.drivers[driver_idx];
        driver.status = DriverStatus::Busy;
        driver.active_order_id = Some(order_id);

        Ok(AssignmentEvent {
            order_id,
            driver_id,
            assigned_at: Utc::now(),
        })
    }

    fn take_order_id(&mut self) -> u64 {
        let id = self.next_order_id;
        self.next_order_id += 1;
        id
    }

    fn take_driver_id(&mut self) -> u64 {
        let id = self.next_driver_id;
        self.next_driver_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::{DispatchStore, StoreError};
    use crate::models::driver::{DriverStatus, NewDriver};
    use crate::models::order::{NewOrder, OrderStatus};

    fn new_order(name: &str, price: f64) -> NewOrder {
        NewOrder {
            customer_name: name.to_string(),
            pickup_address: "1 Pickup Way".to_string(),
            delivery_address: "2 Dropoff Rd".to_string(),
            total_price: price,
        }
    }

    fn new_driver(name: &str) -> NewDriver {
        NewDriver {
            name: name.to_string(),
            phone: "555-0199".to_string(),
            vehicle: "Cargo Bike".to_string(),
        }
    }

    #[test]
    fn order_ids_strictly_increase() {
        let mut store = DispatchStore::new();

        let ids: Vec<u64> = (0..5)
            .map(|i| store.create_order(new_order(&format!("c{i}"), 10.0)).id)
            .collect();

        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(ids[0], 1);
    }

    #[test]
    fn new_order_is_pending_with_single_item() {
        let mut store = DispatchStore::new();
        let order = store.create_order(new_order("Ada", 12.5));

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items, 1);
        assert_eq!(order.driver_id, None);
        assert_eq!(order.total_price, 12.5);
    }

    #[test]
    fn negative_price_is_clamped_to_zero() {
        let mut store = DispatchStore::new();
        let order = store.create_order(new_order("Ada", -3.0));
        assert_eq!(order.total_price, 0.0);
    }

    #[test]
    fn orders_are_listed_in_insertion_order() {
        let mut store = DispatchStore::new();
        store.create_order(new_order("first", 1.0));
        store.create_order(new_order("second", 2.0));

        let names: Vec<&str> = store
            .orders()
            .iter()
            .map(|order| order.customer_name.as_str())
            .collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn registered_driver_defaults() {
        let mut store = DispatchStore::new();
        let driver = store.register_driver(new_driver("Lin"));

        assert_eq!(driver.id, 1);
        assert_eq!(driver.status, DriverStatus::Available);
        assert_eq!(driver.rating, 5.0);
        assert_eq!(driver.active_order_id, None);
    }

    #[test]
    fn assignment_links_both_records() {
        let mut store = DispatchStore::new();
        let order = store.create_order(new_order("Ada", 10.0));
        let driver = store.register_driver(new_driver("Lin"));

        let event = store.assign_driver(order.id, driver.id).unwrap();
        assert_eq!(event.order_id, order.id);
        assert_eq!(event.driver_id, driver.id);

        let order = store.get_order(order.id).unwrap();
        assert_eq!(order.status, OrderStatus::Assigned);
        assert_eq!(order.driver_id, Some(driver.id));

        let driver = store.get_driver(driver.id).unwrap();
        assert_eq!(driver.status, DriverStatus::Busy);
        assert_eq!(driver.active_order_id, Some(order.id));
    }

    #[test]
    fn assignment_with_unknown_order_changes_nothing() {
        let mut store = DispatchStore::new();
        store.create_order(new_order("Ada", 10.0));
        let driver = store.register_driver(new_driver("Lin"));

        let err = store.assign_driver(99, driver.id).unwrap_err();
        assert_eq!(err, StoreError::OrderNotFound(99));

        let driver = store.get_driver(driver.id).unwrap();
        assert_eq!(driver.status, DriverStatus::Available);
        assert_eq!(driver.active_order_id, None);
        assert_eq!(store.orders()[0].status, OrderStatus::Pending);
    }

    #[test]
    fn assignment_with_unknown_driver_changes_nothing() {
        let mut store = DispatchStore::new();
        let order = store.create_order(new_order("Ada", 10.0));
        store.register_driver(new_driver("Lin"));

        let err = store.assign_driver(order.id, 42).unwrap_err();
        assert_eq!(err, StoreError::DriverNotFound(42));

        let order = store.get_order(order.id).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.driver_id, None);
        assert_eq!(store.drivers()[0].status, DriverStatus::Available);
    }

    #[test]
    fn busy_driver_is_reassigned_to_latest_order() {
        let mut store = DispatchStore::new();
        let first = store.create_order(new_order("Ada", 10.0));
        let second = store.create_order(new_order("Grace", 20.0));
        let driver = store.register_driver(new_driver("Lin"));

        store.assign_driver(first.id, driver.id).unwrap();
        store.assign_driver(second.id, driver.id).unwrap();

        let driver = store.get_driver(driver.id).unwrap();
        assert_eq!(driver.active_order_id, Some(second.id));
        // The earlier order keeps its link.
        assert_eq!(store.get_order(first.id).unwrap().driver_id, Some(driver.id));
    }
}
