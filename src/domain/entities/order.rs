//! Order entity owned by the commerce platform's order API.

use serde::Deserialize;

/// An order fetched with its response restricted to `items`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// A single line item within an order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub line_id: i32,

    #[serde(default)]
    pub product: Option<OrderProduct>,
}

/// Product information attached to an order line item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderProduct {
    pub product_code: String,
}

impl Order {
    /// Resolves the order line id for a product code.
    ///
    /// Returns `None` when no order item carries the given product code;
    /// callers decide how to handle unmatched lookups.
    pub fn line_id_for_product(&self, product_code: &str) -> Option<i32> {
        self.items
            .iter()
            .find(|i| {
                i.product
                    .as_ref()
                    .is_some_and(|p| p.product_code == product_code)
            })
            .map(|i| i.line_id)
    }
}
