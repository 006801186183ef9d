//! Workflow state-change event emitted by the commerce platform.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

/// The shipment state that triggers return processing.
pub const STATE_COMPLETED: &str = "COMPLETED";

/// Extended property key carrying the workflow state transition target.
pub const NEW_STATE_KEY: &str = "newState";

/// A webhook notification emitted when a shipment transitions between
/// fulfillment states.
///
/// The payload is received once per invocation and treated as immutable.
/// Every field except `entityId` is tolerated as absent so that sparse or
/// partially populated deliveries still parse; `entityId` (the shipment
/// number) is required before any downstream call is made.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowEvent {
    #[serde(default)]
    pub event_id: String,

    #[serde(default)]
    pub topic: String,

    /// Shipment number as delivered by the platform (stringified number).
    #[serde(default)]
    #[validate(length(min = 1, message = "entityId must not be empty"))]
    pub entity_id: String,

    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,

    #[serde(default)]
    pub correlation_id: String,

    #[serde(default)]
    pub is_test: bool,

    #[serde(default)]
    pub extended_properties: Vec<ExtendedProperty>,
}

/// A key/value pair attached to the event by the workflow engine.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtendedProperty {
    pub key: String,
    pub value: String,
}

impl WorkflowEvent {
    /// Looks up an extended property value by key.
    pub fn extended_property(&self, key: &str) -> Option<&str> {
        self.extended_properties
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }

    /// The workflow state the shipment transitioned into, if present.
    pub fn new_state(&self) -> Option<&str> {
        self.extended_property(NEW_STATE_KEY)
    }

    /// Whether this event marks a shipment reaching the `COMPLETED` state.
    pub fn is_completed_transition(&self) -> bool {
        self.new_state() == Some(STATE_COMPLETED)
    }
}
