//! Shipment entity owned by the commerce platform's fulfillment API.

use serde::Deserialize;

/// Physically shipped order contents, fetched by shipment number.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub shipment_number: i64,
    pub order_id: String,
    pub site_id: i64,

    #[serde(default)]
    pub items: Vec<ShipmentItem>,
}

/// A single line item within a shipment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentItem {
    pub line_id: i32,
    pub product_code: String,
    pub quantity: i32,

    /// Upstream item metadata bag. Absent for most items; trade-ins carry
    /// the `isTradeInItem` flag here.
    #[serde(default)]
    pub data: Option<ShipmentItemData>,
}

/// The subset of the upstream item data bag this service reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentItemData {
    #[serde(default)]
    pub is_trade_in_item: bool,
}

impl ShipmentItem {
    /// Whether this line item originated from a trade-in transaction.
    pub fn is_trade_in(&self) -> bool {
        self.data.as_ref().is_some_and(|d| d.is_trade_in_item)
    }
}

impl Shipment {
    /// Line items flagged as trade-ins, eligible for automatic return creation.
    pub fn trade_in_items(&self) -> Vec<&ShipmentItem> {
        self.items.iter().filter(|i| i.is_trade_in()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn shipment_with_items(items: serde_json::Value) -> Shipment {
        serde_json::from_value(json!({
            "shipmentNumber": 1001,
            "orderId": "ord-100",
            "siteId": 22,
            "items": items
        }))
        .unwrap()
    }

    #[test]
    fn test_trade_in_filter() {
        let shipment = shipment_with_items(json!([
            {
                "lineId": 10,
                "productCode": "A",
                "quantity": 1,
                "data": { "isTradeInItem": true }
            },
            {
                "lineId": 11,
                "productCode": "B",
                "quantity": 2
            },
            {
                "lineId": 12,
                "productCode": "C",
                "quantity": 1,
                "data": { "isTradeInItem": false }
            }
        ]));

        let trade_ins = shipment.trade_in_items();

        assert_eq!(trade_ins.len(), 1);
        assert_eq!(trade_ins[0].line_id, 10);
        assert_eq!(trade_ins[0].product_code, "A");
    }

    #[test]
    fn test_missing_data_block_is_not_trade_in() {
        let shipment = shipment_with_items(json!([
            { "lineId": 10, "productCode": "A", "quantity": 1 }
        ]));

        assert!(shipment.trade_in_items().is_empty());
    }

    #[test]
    fn test_missing_items_defaults_to_empty() {
        let shipment: Shipment = serde_json::from_value(json!({
            "shipmentNumber": 1001,
            "orderId": "ord-100",
            "siteId": 22
        }))
        .unwrap();

        assert!(shipment.items.is_empty());
        assert!(shipment.trade_in_items().is_empty());
    }

    #[test]
    fn test_data_bag_ignores_unknown_keys() {
        let shipment = shipment_with_items(json!([
            {
                "lineId": 10,
                "productCode": "A",
                "quantity": 1,
                "data": { "isTradeInItem": true, "sourceDevice": "kiosk" }
            }
        ]));

        assert_eq!(shipment.trade_in_items().len(), 1);
    }
}
