//! Client trait for shipment lookups.

use crate::domain::entities::Shipment;
use crate::error::AppError;
use async_trait::async_trait;

/// Lookup interface for shipments on the fulfillment API.
///
/// # Implementations
///
/// - [`crate::infrastructure::commerce::HttpShipmentClient`] - REST implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShipmentClient: Send + Sync {
    /// Fetches a shipment by its numeric shipment number.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on transport failures or when the API
    /// answers with a non-success status (including unknown shipment numbers).
    async fn get_shipment(&self, shipment_number: i64) -> Result<Shipment, AppError>;
}
