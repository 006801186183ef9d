//! REST implementation of the shipment client.

use async_trait::async_trait;
use std::sync::Arc;

use super::client::CommerceClient;
use crate::domain::clients::ShipmentClient;
use crate::domain::entities::Shipment;
use crate::error::{AppError, map_commerce_error};

/// Shipment lookup against the fulfillment API.
pub struct HttpShipmentClient {
    client: Arc<CommerceClient>,
}

impl HttpShipmentClient {
    /// Creates a new client sharing the tenant connection.
    pub fn new(client: Arc<CommerceClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ShipmentClient for HttpShipmentClient {
    async fn get_shipment(&self, shipment_number: i64) -> Result<Shipment, AppError> {
        let fetch = async {
            let response = self
                .client
                .get(&format!("api/commerce/shipments/{shipment_number}"))
                .send()
                .await?;
            let response = CommerceClient::expect_success(response).await?;
            Ok::<_, super::CommerceApiError>(response.json::<Shipment>().await?)
        };

        fetch.await.map_err(|e| map_commerce_error("get_shipment", e))
    }
}
