use actix_web::web;

/// # Health Check Endpoint
///
/// Returns the service status and identifier.
///
/// ```text
/// GET /health - Service health status
/// ```
pub mod health;

/// # Service Info Endpoint
///
/// Returns the service title, version, and current UTC timestamp.
///
/// ```text
/// GET /info - Service metadata
/// ```
pub mod info;

/// # Root Endpoint
///
/// Returns the API welcome message.
///
/// ```text
/// GET / - Welcome message
/// ```
pub mod root;

/// # API Route Configuration
///
/// Registers all endpoints with the Actix-web service configuration. The
/// paths are published at the root of the server, unversioned.
///
/// ## Configured Routes
///
/// - `GET /`: Welcome message
/// - `GET /health`: Health check endpoint
/// - `GET /info`: Service metadata endpoint
///
/// Anything else falls through to Actix-web's default not-found response.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root::index)
        .service(health::health)
        .service(info::info);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_all_routes_registered() {
        let app = test::init_service(App::new().configure(configure)).await;

        for path in ["/", "/health", "/info"] {
            let req = test::TestRequest::get().uri(path).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 200, "GET {path} should return 200 OK");
        }
    }
}
