//! Handler for the shipment workflow state-change webhook.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::ack::AckResponse;
use crate::application::services::ProcessOutcome;
use crate::domain::entities::WorkflowEvent;
use crate::state::AppState;

/// Receives shipment workflow state-change events.
///
/// # Endpoint
///
/// `POST /webhooks/shipment-workflow-state-changed`
///
/// # Contract
///
/// Always responds `200 OK` with `{"message": "Function executed successfully!"}`.
/// The platform treats anything else as a delivery failure and redelivers, so
/// malformed payloads and processing errors are logged and acknowledged, never
/// surfaced. There is no idempotency key: a redelivered event for a completed
/// shipment creates a duplicate return.
///
/// # Processing
///
/// An absent or unparsable body is a no-op. Valid events are handed to the
/// [`ReturnProcessingService`](crate::application::services::ReturnProcessingService);
/// only transitions into `COMPLETED` trigger downstream calls.
pub async fn shipment_event_handler(
    State(state): State<AppState>,
    body: String,
) -> Json<AckResponse> {
    tracing::debug!(body = %body, "Received shipment workflow event");

    let Some(event) = parse_event(&body) else {
        return Json(AckResponse::ok());
    };

    match state.processor.process_event(&event).await {
        Ok(ProcessOutcome::ReturnCreated {
            shipment_number, ..
        })
        | Ok(ProcessOutcome::NoTradeInItems { shipment_number }) => {
            tracing::info!(shipment_number, "Processed shipment");
        }
        Ok(ProcessOutcome::IgnoredState { .. }) => {}
        Err(e) => {
            tracing::error!(
                entity_id = %event.entity_id,
                error = %e,
                "Failed to process shipment event"
            );
        }
    }

    Json(AckResponse::ok())
}

/// Parses and validates the raw webhook body.
///
/// Returns `None` for an absent body, malformed JSON, or an event without an
/// entity id; each case is logged and treated as a no-op.
fn parse_event(body: &str) -> Option<WorkflowEvent> {
    if body.trim().is_empty() {
        tracing::info!("Webhook delivered without a body; nothing to process");
        return None;
    }

    let event: WorkflowEvent = match serde_json::from_str(body) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!(error = %e, "Discarding malformed webhook payload");
            return None;
        }
    };

    if let Err(e) = event.validate() {
        tracing::warn!(error = %e, "Discarding webhook payload without an entity id");
        return None;
    }

    Some(event)
}
