use crate::models::WelcomeResponse;
use actix_web::{HttpResponse, Responder, get};

/// # Root Endpoint
///
/// Returns the API welcome message.
///
/// ## Response
///
/// - **200 OK**:
///   - Content-Type: `application/json`
///   - Body: [`WelcomeResponse`] with `message` and `service`
///
/// ## Example Response
///
/// ```json
/// {
///   "message": "Welcome to Signant Health Demo API",
///   "service": "python"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    responses(
        (status = 200, description = "API welcome message", body = WelcomeResponse)
    )
)]
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(WelcomeResponse::welcome())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use serde_json::from_str;

    #[actix_web::test]
    async fn test_root_endpoint() {
        let app = test::init_service(App::new().service(index)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        let body_str = std::str::from_utf8(&body).unwrap();
        let welcome: WelcomeResponse = from_str(body_str).unwrap();

        assert_eq!(welcome.message, "Welcome to Signant Health Demo API");
        assert_eq!(welcome.service, "python");
    }
}
