use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Welcome payload returned by the root endpoint.
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
    pub service: String,
}

impl WelcomeResponse {
    pub fn welcome() -> Self {
        Self {
            message: "Welcome to Signant Health Demo API".to_string(),
            service: "python".to_string(),
        }
    }
}
