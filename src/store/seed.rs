use chrono::Utc;

use crate::models::driver::{Driver, DriverStatus};
use crate::models::order::{Order, OrderStatus};
use crate::store::DispatchStore;

impl DispatchStore {
    /// A store preloaded with three drivers and two orders for demos.
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();
        let now = Utc::now();

        store.drivers = vec![
            sample_driver(1, "John Smith", "555-0101", "Honda Civic", 4.8),
            sample_driver(2, "Maria Garcia", "555-0102", "Toyota Camry", 4.9),
            sample_driver(3, "Alex Johnson", "555-0103", "Ford Transit", 4.7),
        ];
        store.next_driver_id = 4;

        store.orders = vec![
            Order {
                id: 1,
                customer_name: "Alice Wilson".to_string(),
                pickup_address: "123 Main St, New York, NY".to_string(),
                delivery_address: "456 Oak Ave, New York, NY".to_string(),
                status: OrderStatus::Pending,
                driver_id: None,
                total_price: 25.99,
                items: 1,
                created_at: now,
            },
            Order {
                id: 2,
                customer_name: "Bob Brown".to_string(),
                pickup_address: "789 Pine Rd, New York, NY".to_string(),
                delivery_address: "321 Elm St, New York, NY".to_string(),
                status: OrderStatus::InTransit,
                driver_id: Some(1),
                total_price: 89.99,
                items: 2,
                created_at: now,
            },
        ];
        store.next_order_id = 3;

        store
    }
}

fn sample_driver(id: u64, name: &str, phone: &str, vehicle: &str, rating: f64) -> Driver {
    Driver {
        id,
        name: name.to_string(),
        phone: phone.to_string(),
        vehicle: vehicle.to_string(),
        status: DriverStatus::Available,
        rating,
        active_order_id: None,
    }
}
