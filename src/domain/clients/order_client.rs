//! Client trait for order lookups.

use crate::domain::entities::Order;
use crate::error::AppError;
use async_trait::async_trait;

/// Lookup interface for orders on the commerce API.
///
/// # Implementations
///
/// - [`crate::infrastructure::commerce::HttpOrderClient`] - REST implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderClient: Send + Sync {
    /// Fetches an order by id.
    ///
    /// `response_fields` restricts the fields the API returns (e.g. `items`);
    /// an empty string fetches the full order document.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on transport failures or when the API
    /// answers with a non-success status.
    async fn get_order(&self, order_id: &str, response_fields: &str) -> Result<Order, AppError>;
}
