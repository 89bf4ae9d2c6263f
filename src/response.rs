//! Small response bodies shared by handlers.

use serde::Serialize;
use utoipa::ToSchema;

/// Plain acknowledgement, e.g. after a delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        MessageBody {
            message: message.into(),
        }
    }
}

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct WelcomeBody {
    pub message: &'static str,
    /// Interactive Swagger UI.
    pub docs: &'static str,
    pub openapi: &'static str,
    pub health: &'static str,
}
