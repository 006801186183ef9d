//! Client trait for return creation.

use crate::domain::entities::ReturnRequest;
use crate::error::AppError;
use async_trait::async_trait;

/// Submission interface for the returns API.
///
/// # Implementations
///
/// - [`crate::infrastructure::commerce::HttpReturnClient`] - REST implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReturnClient: Send + Sync {
    /// Submits a return request.
    ///
    /// When `site_override` is set, the request targets that site via a
    /// per-request header instead of the credentials' default channel.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on transport failures or when the API
    /// rejects the payload.
    async fn create_return(
        &self,
        payload: &ReturnRequest,
        site_override: Option<i64>,
    ) -> Result<(), AppError>;
}
