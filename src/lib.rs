//! # Trade-In Returns
//!
//! A webhook service that reacts to shipment workflow state changes from a
//! commerce platform and creates returns for trade-in items, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and collaborator traits
//! - **Application Layer** ([`application`]) - The event processing pipeline
//! - **Infrastructure Layer** ([`infrastructure`]) - Commerce API HTTP clients
//! - **API Layer** ([`api`]) - Webhook endpoint, DTOs, and middleware
//!
//! ## Processing Flow
//!
//! 1. A shipment workflow state-change event arrives on the webhook endpoint
//! 2. When the new state is `COMPLETED`, the shipment is fetched
//! 3. Shipment items flagged as trade-ins are joined against the originating
//!    order and submitted as a single return request
//! 4. The webhook is always acknowledged with `200 OK`; failures only surface
//!    in the logs
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export API_BASE_URL="https://t00000.sandbox.example-commerce.com"
//! export API_CLIENT_ID="app-key"
//! export API_CLIENT_SECRET="app-secret"
//! export DEFAULT_RETURN_LOCATION_CODE="WH01"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ProcessOutcome, ReturnPolicy, ReturnProcessingService};
    pub use crate::domain::entities::{Order, ReturnRequest, Shipment, WorkflowEvent};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
