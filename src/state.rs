use std::sync::Arc;

use crate::application::services::ReturnProcessingService;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<ReturnProcessingService>,
}

impl AppState {
    pub fn new(processor: Arc<ReturnProcessingService>) -> Self {
        Self { processor }
    }
}
