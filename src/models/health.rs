use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Represents the operational status of the service.
/// Used as the response format for the health check endpoint.
///
/// ## Fields
/// - `status`: String indicating service availability ("OK")
/// - `service`: Fixed identifier of this service variant ("python")
///
/// ## Example JSON
/// ```json
/// {
///   "status": "OK",
///   "service": "python"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
            service: "python".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_ok() {
        let response = HealthResponse::ok();

        assert_eq!(response.status, "OK");
        assert_eq!(response.service, "python");
    }

    #[test]
    fn test_health_response_serialization() {
        let json = serde_json::to_value(HealthResponse::ok()).expect("Should serialize to JSON");

        assert_eq!(
            json,
            serde_json::json!({"status": "OK", "service": "python"})
        );
    }
}
