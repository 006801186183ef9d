//! REST implementation of the order client.

use async_trait::async_trait;
use std::sync::Arc;

use super::client::CommerceClient;
use crate::domain::clients::OrderClient;
use crate::domain::entities::Order;
use crate::error::{AppError, map_commerce_error};

/// Order lookup against the commerce API.
pub struct HttpOrderClient {
    client: Arc<CommerceClient>,
}

impl HttpOrderClient {
    /// Creates a new client sharing the tenant connection.
    pub fn new(client: Arc<CommerceClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrderClient for HttpOrderClient {
    async fn get_order(&self, order_id: &str, response_fields: &str) -> Result<Order, AppError> {
        let fetch = async {
            let mut request = self.client.get(&format!("api/commerce/orders/{order_id}"));
            if !response_fields.is_empty() {
                request = request.query(&[("responseFields", response_fields)]);
            }

            let response = request.send().await?;
            let response = CommerceClient::expect_success(response).await?;
            Ok::<_, super::CommerceApiError>(response.json::<Order>().await?)
        };

        fetch.await.map_err(|e| map_commerce_error("get_order", e))
    }
}
