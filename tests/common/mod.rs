#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};
use tradein_returns::application::services::{ReturnPolicy, ReturnProcessingService};
use tradein_returns::domain::clients::{OrderClient, ReturnClient, ShipmentClient};
use tradein_returns::domain::entities::{Order, ReturnRequest, Shipment};
use tradein_returns::error::AppError;
use tradein_returns::state::AppState;

/// Shipment client stub. `None` simulates a fetch failure.
pub struct StubShipmentClient {
    shipment: Option<Shipment>,
    calls: AtomicUsize,
}

impl StubShipmentClient {
    pub fn returning(shipment: Shipment) -> Arc<Self> {
        Arc::new(Self {
            shipment: Some(shipment),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            shipment: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ShipmentClient for StubShipmentClient {
    async fn get_shipment(&self, _shipment_number: i64) -> Result<Shipment, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.shipment.clone().ok_or_else(|| {
            AppError::upstream("Commerce API rejected get_shipment", json!({ "status": 404 }))
        })
    }
}

/// Order client stub. `None` simulates a fetch failure.
pub struct StubOrderClient {
    order: Option<Order>,
    calls: AtomicUsize,
}

impl StubOrderClient {
    pub fn returning(order: Order) -> Arc<Self> {
        Arc::new(Self {
            order: Some(order),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            order: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderClient for StubOrderClient {
    async fn get_order(&self, _order_id: &str, _response_fields: &str) -> Result<Order, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.order.clone().ok_or_else(|| {
            AppError::upstream("Commerce API rejected get_order", json!({ "status": 404 }))
        })
    }
}

/// Return client stub recording every submission as (payload JSON, site override).
pub struct StubReturnClient {
    fail: bool,
    submissions: Mutex<Vec<(Value, Option<i64>)>>,
}

impl StubReturnClient {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self {
            fail: false,
            submissions: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            submissions: Mutex::new(Vec::new()),
        })
    }

    pub fn submissions(&self) -> Vec<(Value, Option<i64>)> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReturnClient for StubReturnClient {
    async fn create_return(
        &self,
        payload: &ReturnRequest,
        site_override: Option<i64>,
    ) -> Result<(), AppError> {
        self.submissions
            .lock()
            .unwrap()
            .push((serde_json::to_value(payload).unwrap(), site_override));

        if self.fail {
            return Err(AppError::upstream(
                "Commerce API rejected create_return",
                json!({ "status": 422 }),
            ));
        }
        Ok(())
    }
}

pub fn default_policy() -> ReturnPolicy {
    ReturnPolicy {
        return_reason: "TRADE IN".to_string(),
        location_code: "WH01".to_string(),
        use_site_header: true,
    }
}

pub fn create_test_state(
    shipments: Arc<StubShipmentClient>,
    orders: Arc<StubOrderClient>,
    returns: Arc<StubReturnClient>,
    policy: ReturnPolicy,
) -> AppState {
    AppState::new(Arc::new(ReturnProcessingService::new(
        shipments, orders, returns, policy,
    )))
}

/// Shipment `1001` for order `ord-100` on site `22` with one trade-in item
/// (product `A`, quantity 1, line 10) and one regular item.
pub fn sample_shipment() -> Shipment {
    serde_json::from_value(json!({
        "shipmentNumber": 1001,
        "orderId": "ord-100",
        "siteId": 22,
        "items": [
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
            }
        ]
    }))
    .unwrap()
}

/// Shipment `1001` with no trade-in items.
pub fn shipment_without_trade_ins() -> Shipment {
    serde_json::from_value(json!({
        "shipmentNumber": 1001,
        "orderId": "ord-100",
        "siteId": 22,
        "items": [
            { "lineId": 11, "productCode": "B", "quantity": 2 }
        ]
    }))
    .unwrap()
}

/// Order with line 1 for product `A` and line 2 for product `B`.
pub fn sample_order() -> Order {
    serde_json::from_value(json!({
        "items": [
            { "lineId": 1, "product": { "productCode": "A" } },
            { "lineId": 2, "product": { "productCode": "B" } }
        ]
    }))
    .unwrap()
}

/// A state-change event payload for shipment `1001`.
pub fn event_payload(new_state: &str) -> Value {
    json!({
        "eventId": "evt-1",
        "topic": "shipment.workflowstatechanged",
        "entityId": "1001",
        "correlationId": "corr-1",
        "isTest": false,
        "extendedProperties": [
            { "key": "oldState", "value": "ACCEPTED" },
            { "key": "newState", "value": new_state }
        ]
    })
}
