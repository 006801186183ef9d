//! Collaborator trait definitions for the domain layer.
//!
//! These traits abstract the commerce platform APIs the processing pipeline
//! depends on. Concrete REST implementations live in
//! `crate::infrastructure::commerce`; mock implementations are auto-generated
//! via `mockall` for testing.
//!
//! # Available Clients
//!
//! - [`ShipmentClient`] - Shipment lookup on the fulfillment API
//! - [`OrderClient`] - Order lookup
//! - [`ReturnClient`] - Return creation

pub mod order_client;
pub mod return_client;
pub mod shipment_client;

pub use order_client::OrderClient;
pub use return_client::ReturnClient;
pub use shipment_client::ShipmentClient;

#[cfg(test)]
pub use order_client::MockOrderClient;
#[cfg(test)]
pub use return_client::MockReturnClient;
#[cfg(test)]
pub use shipment_client::MockShipmentClient;
