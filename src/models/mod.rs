pub mod assignment;
pub mod dashboard;
pub mod driver;
pub mod order;
