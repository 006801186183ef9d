//! REST implementation of the return client.

use async_trait::async_trait;
use std::sync::Arc;

use super::client::CommerceClient;
use crate::domain::clients::ReturnClient;
use crate::domain::entities::ReturnRequest;
use crate::error::{AppError, map_commerce_error};

/// Per-request header selecting the target site, overriding the
/// credentials' default channel.
const SITE_HEADER: &str = "x-vol-site";

/// Return creation against the returns API.
pub struct HttpReturnClient {
    client: Arc<CommerceClient>,
}

impl HttpReturnClient {
    /// Creates a new client sharing the tenant connection.
    pub fn new(client: Arc<CommerceClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReturnClient for HttpReturnClient {
    async fn create_return(
        &self,
        payload: &ReturnRequest,
        site_override: Option<i64>,
    ) -> Result<(), AppError> {
        let submit = async {
            let mut request = self.client.post("api/commerce/returns").json(payload);
            if let Some(site_id) = site_override {
                request = request.header(SITE_HEADER, site_id.to_string());
            }

            let response = request.send().await?;
            CommerceClient::expect_success(response).await?;
            Ok::<_, super::CommerceApiError>(())
        };

        submit.await.map_err(|e| map_commerce_error("create_return", e))
    }
}
