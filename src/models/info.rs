use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Service Info Response
///
/// Service metadata returned by the `/info` endpoint.
///
/// ## Fields
/// - `service`: Human-readable service title
/// - `version`: Package version of the running build
/// - `timestamp`: ISO 8601 UTC timestamp of the request, millisecond
///   precision, trailing `Z`
///
/// ## Example JSON
/// ```json
/// {
///   "service": "Signant Health Demo - Python Service",
///   "version": "1.0.0",
///   "timestamp": "2024-03-10T15:30:45.123Z"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct InfoResponse {
    pub service: String,
    pub version: String,
    pub timestamp: String,
}

impl InfoResponse {
    /// Builds the payload with the current UTC time.
    pub fn current() -> Self {
        Self {
            service: "Signant Health Demo - Python Service".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
