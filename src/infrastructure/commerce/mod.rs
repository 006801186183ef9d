//! Commerce platform REST clients.
//!
//! All implementations share one [`CommerceClient`] (connection pool,
//! tenant base URL, credentials) constructed at startup.

pub mod client;
pub mod order_api;
pub mod return_api;
pub mod shipment_api;

pub use client::{CommerceApiError, CommerceClient};
pub use order_api::HttpOrderClient;
pub use return_api::HttpReturnClient;
pub use shipment_api::HttpShipmentClient;
