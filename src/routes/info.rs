use crate::models::InfoResponse;
use actix_web::{HttpResponse, Responder, get};

/// # Service Info Endpoint
///
/// Returns service metadata: the service title, the running version, and the
/// current UTC time. The timestamp is recomputed on every request; nothing
/// else in the payload varies.
///
/// ## Response
///
/// - **200 OK**:
///   - Content-Type: `application/json`
///   - Body: [`InfoResponse`] with `service`, `version`, and an ISO 8601
///     `timestamp` ending in `Z`
///
/// ## Example Response
///
/// ```json
/// {
///   "service": "Signant Health Demo - Python Service",
///   "version": "1.0.0",
///   "timestamp": "2023-10-05T12:34:56.789Z"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/info",
    tag = "Service Info",
    responses(
        (status = 200, description = "Service metadata", body = InfoResponse)
    )
)]
#[get("/info")]
pub async fn info() -> impl Responder {
    HttpResponse::Ok().json(InfoResponse::current())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use chrono::DateTime;
    use serde_json::Value;

    #[actix_web::test]
    async fn test_info_endpoint() {
        let app = test::init_service(App::new().service(info)).await;

        let req = test::TestRequest::get().uri("/info").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200, "Status code should be 200 OK");

        let body = test::read_body(resp).await;
        let body_json: Value = serde_json::from_slice(&body).expect("Body should be valid JSON");

        assert_eq!(body_json["service"], "Signant Health Demo - Python Service");
        assert_eq!(body_json["version"], "1.0.0");

        // Verify timestamp format
        let timestamp = body_json["timestamp"]
            .as_str()
            .expect("Timestamp should be a string");
        assert!(timestamp.ends_with('Z'), "Timestamp should end with 'Z'");

        let _dt = DateTime::parse_from_rfc3339(timestamp)
            .expect("Timestamp should be a valid RFC 3339 / ISO 8601 date");
    }
}
