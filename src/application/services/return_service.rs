//! Trade-in return processing service.

use std::sync::Arc;

use crate::domain::clients::{OrderClient, ReturnClient, ShipmentClient};
use crate::domain::entities::{
    Order, RETURN_TYPE_REFUND, ReturnItem, ReturnProduct, ReturnReason, ReturnRequest, Shipment,
    ShipmentItem, WorkflowEvent,
};
use crate::error::AppError;
use serde_json::json;

/// Order fields fetched when building a return; the join only needs line items.
const ORDER_RESPONSE_FIELDS: &str = "items";

/// Business defaults applied to every return this service creates.
///
/// The two upstream processing variants (per-site submission with a custom
/// reason vs. default channel) collapse into this one configuration.
#[derive(Debug, Clone)]
pub struct ReturnPolicy {
    /// Reason string stamped on each return line.
    pub return_reason: String,
    /// Location code stamped on the return payload.
    pub location_code: String,
    /// When true, submission carries the shipment's site id as a per-request
    /// header override; when false, the default channel is used.
    pub use_site_header: bool,
}

/// Result of processing one workflow event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// The event did not mark a transition into `COMPLETED`; nothing was fetched.
    IgnoredState { state: Option<String> },
    /// The completed shipment contained no trade-in items; no return was created.
    NoTradeInItems { shipment_number: i64 },
    /// A return with one line per trade-in item was submitted.
    ReturnCreated {
        shipment_number: i64,
        line_count: usize,
    },
}

/// The event processor: turns completed-shipment events into return requests.
///
/// Holds the commerce API collaborators behind trait objects so tests can
/// substitute mocks, plus the [`ReturnPolicy`] business defaults. One
/// invocation is strictly sequential: fetch shipment, then (conditionally)
/// fetch order, then submit.
pub struct ReturnProcessingService {
    shipments: Arc<dyn ShipmentClient>,
    orders: Arc<dyn OrderClient>,
    returns: Arc<dyn ReturnClient>,
    policy: ReturnPolicy,
}

impl ReturnProcessingService {
    /// Creates a new processing service.
    pub fn new(
        shipments: Arc<dyn ShipmentClient>,
        orders: Arc<dyn OrderClient>,
        returns: Arc<dyn ReturnClient>,
        policy: ReturnPolicy,
    ) -> Self {
        Self {
            shipments,
            orders,
            returns,
            policy,
        }
    }

    /// Processes a shipment workflow state-change event.
    ///
    /// Only transitions into `COMPLETED` trigger processing. The shipment is
    /// fetched by the number carried in `entityId`; its trade-in items (if
    /// any) are joined against the originating order and submitted as a
    /// single return.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `entityId` is not numeric and
    /// [`AppError::Upstream`] when a commerce API call fails. Callers decide
    /// whether errors surface; the webhook handler logs and swallows them.
    pub async fn process_event(&self, event: &WorkflowEvent) -> Result<ProcessOutcome, AppError> {
        if !event.is_completed_transition() {
            let state = event.new_state().map(str::to_string);
            tracing::debug!(?state, "Ignoring event: shipment not completed");
            return Ok(ProcessOutcome::IgnoredState { state });
        }

        let shipment_number: i64 = event.entity_id.parse().map_err(|_| {
            AppError::bad_request(
                "Event entityId is not a numeric shipment number",
                json!({ "entity_id": event.entity_id }),
            )
        })?;

        let shipment = self.shipments.get_shipment(shipment_number).await?;

        let trade_in_items = shipment.trade_in_items();
        if trade_in_items.is_empty() {
            tracing::info!(
                shipment_number = shipment.shipment_number,
                "No returns to create for shipment"
            );
            return Ok(ProcessOutcome::NoTradeInItems {
                shipment_number: shipment.shipment_number,
            });
        }

        let order = self
            .orders
            .get_order(&shipment.order_id, ORDER_RESPONSE_FIELDS)
            .await?;

        let payload = self.build_return_request(&shipment, &order, &trade_in_items);
        let line_count = payload.items.len();

        let site_override = self.policy.use_site_header.then_some(shipment.site_id);
        self.returns.create_return(&payload, site_override).await?;

        tracing::info!(
            shipment_number = shipment.shipment_number,
            lines = line_count,
            "Created return for shipment"
        );

        Ok(ProcessOutcome::ReturnCreated {
            shipment_number: shipment.shipment_number,
            line_count,
        })
    }

    /// Assembles the return payload from trade-in items and the originating order.
    ///
    /// Each line's `orderLineId` is resolved by product code against the order.
    /// An unmatched lookup keeps the line (the returns API tolerates partial
    /// line references) but is logged, since it usually signals order/shipment
    /// drift upstream.
    fn build_return_request(
        &self,
        shipment: &Shipment,
        order: &Order,
        trade_in_items: &[&ShipmentItem],
    ) -> ReturnRequest {
        let items = trade_in_items
            .iter()
            .map(|item| {
                let order_line_id = order.line_id_for_product(&item.product_code);
                if order_line_id.is_none() {
                    tracing::warn!(
                        shipment_number = shipment.shipment_number,
                        product_code = %item.product_code,
                        "No order line matches trade-in item; submitting without orderLineId"
                    );
                }

                ReturnItem {
                    order_line_id,
                    product: ReturnProduct {
                        product_code: item.product_code.clone(),
                        is_packaged_stand_alone: true,
                    },
                    reasons: vec![ReturnReason {
                        reason: self.policy.return_reason.clone(),
                        quantity: item.quantity,
                    }],
                    exclude_product_extras: true,
                    return_type: RETURN_TYPE_REFUND,
                    return_not_required: false,
                    quantity_received: 0,
                    quantity_shipped: 0,
                    quantity_restockable: 0,
                    quantity_restocked: 0,
                    shipment_item_id: item.line_id,
                    shipment_number: shipment.shipment_number,
                }
            })
            .collect();

        ReturnRequest {
            original_order_id: shipment.order_id.clone(),
            items,
            return_type: RETURN_TYPE_REFUND,
            action_required: false,
            is_unified: true,
            location_code: self.policy.location_code.clone(),
        }
    }
}
