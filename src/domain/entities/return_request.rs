//! Return request payload submitted to the commerce returns API.

use serde::Serialize;

/// Return type for trade-in returns. Refund is the only flow this service creates.
pub const RETURN_TYPE_REFUND: &str = "REFUND";

/// A customer's return request tied to an original order and shipment.
///
/// Constructed from a shipment's trade-in items joined against the
/// originating order, submitted once, not retained.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
    pub original_order_id: String,
    pub items: Vec<ReturnItem>,
    pub return_type: &'static str,
    pub action_required: bool,
    pub is_unified: bool,
    pub location_code: String,
}

/// One return line, built from one trade-in shipment item.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnItem {
    /// Order line matching the item's product code. Unresolved lookups are
    /// submitted without the field, mirroring the platform's tolerance for
    /// partial line references.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_line_id: Option<i32>,

    pub product: ReturnProduct,
    pub reasons: Vec<ReturnReason>,
    pub exclude_product_extras: bool,
    pub return_type: &'static str,
    pub return_not_required: bool,
    pub quantity_received: i32,
    pub quantity_shipped: i32,
    pub quantity_restockable: i32,
    pub quantity_restocked: i32,
    pub shipment_item_id: i32,
    pub shipment_number: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnProduct {
    pub product_code: String,
    pub is_packaged_stand_alone: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnReason {
    pub reason: String,
    pub quantity: i32,
}
