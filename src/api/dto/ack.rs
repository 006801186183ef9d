//! DTO for the webhook acknowledgment.

use serde::Serialize;

/// Fixed-shape acknowledgment returned for every webhook delivery.
///
/// The platform only needs a `200 OK` to consider the event delivered;
/// processing failures never change this response.
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub message: &'static str,
}

impl AckResponse {
    /// The acknowledgment sent for every delivery, successful or not.
    pub fn ok() -> Self {
        Self {
            message: "Function executed successfully!",
        }
    }
}
