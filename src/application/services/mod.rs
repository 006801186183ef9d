//! Application services implementing the processing pipeline.

pub mod return_service;

pub use return_service::{ProcessOutcome, ReturnPolicy, ReturnProcessingService};
