use crate::models::HealthResponse;
use actix_web::{HttpResponse, Responder, get};

/// # Health Check Endpoint
///
/// Provides a liveness probe for the service, indicating whether the API is
/// operational.
///
/// ## Response
///
/// - **200 OK**: Service is running and healthy
///   - Content-Type: `application/json`
///   - Body: [`HealthResponse`] with `status` ("OK") and `service` ("python")
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "OK",
///   "service": "python"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health Check",
    responses(
        (status = 200, description = "Service is running and healthy", body = HealthResponse)
    )
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::ok())
}
