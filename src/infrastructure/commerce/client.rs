//! Shared commerce API HTTP client.
//!
//! One [`CommerceClient`] is built at startup and shared by all API
//! implementations via `Arc`. It owns the connection pool, the tenant base
//! URL, and the application credentials; requests are authorized per call,
//! nothing is mutated after construction.

use reqwest::RequestBuilder;
use std::time::Duration;

/// Errors raised by commerce API calls before they are mapped into the
/// application taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum CommerceApiError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
}

/// HTTP client for the commerce platform, bound to one tenant.
pub struct CommerceClient {
    http: reqwest::Client,
    base_url: String,
    client_id: String,
    client_secret: String,
}

impl CommerceClient {
    /// Builds a client for the given tenant base URL and application credentials.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceApiError::Transport`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CommerceApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        })
    }

    /// Starts an authorized GET request against an API path.
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.authorized(self.http.get(self.endpoint(path)))
    }

    /// Starts an authorized POST request against an API path.
    pub fn post(&self, path: &str) -> RequestBuilder {
        self.authorized(self.http.post(self.endpoint(path)))
    }

    /// Joins an API path onto the tenant base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(&self.client_id, Some(&self.client_secret))
    }

    /// Turns a non-success response into [`CommerceApiError::Status`],
    /// capturing the response body for the logs.
    pub async fn expect_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, CommerceApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(CommerceApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> CommerceClient {
        CommerceClient::new(base_url, "id", "secret", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let c = client("https://t00000.sandbox.example.com");

        assert_eq!(
            c.endpoint("api/commerce/returns"),
            "https://t00000.sandbox.example.com/api/commerce/returns"
        );
    }

    #[test]
    fn test_endpoint_normalizes_slashes() {
        let c = client("https://t00000.sandbox.example.com/");

        assert_eq!(
            c.endpoint("/api/commerce/shipments/1001"),
            "https://t00000.sandbox.example.com/api/commerce/shipments/1001"
        );
    }

    #[test]
    fn test_status_error_display() {
        let e = CommerceApiError::Status {
            status: 404,
            body: "shipment not found".to_string(),
        };

        assert_eq!(e.to_string(), "unexpected status 404: shipment not found");
    }
}
