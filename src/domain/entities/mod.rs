//! Core business entities.
//!
//! Wire shapes match the commerce platform's camelCase JSON. [`Shipment`] and
//! [`Order`] are externally owned and only deserialized; [`ReturnRequest`] is
//! constructed here and only serialized.

pub mod order;
pub mod return_request;
pub mod shipment;
pub mod workflow_event;

pub use order::{Order, OrderItem, OrderProduct};
pub use return_request::{
    RETURN_TYPE_REFUND, ReturnItem, ReturnProduct, ReturnReason, ReturnRequest,
};
pub use shipment::{Shipment, ShipmentItem, ShipmentItemData};
pub use workflow_event::{ExtendedProperty, NEW_STATE_KEY, STATE_COMPLETED, WorkflowEvent};
