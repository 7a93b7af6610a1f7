use actix_web::{App, HttpServer};
use signant_health_demo::config::{BIND_ADDRESS, ServerConfig};
use signant_health_demo::openapi::ApiDoc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Signant Health Demo Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Three informational JSON endpoints
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
///
/// # Endpoints
/// - Root: `GET /`
/// - Health check: `GET /health`
/// - Service info: `GET /info`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Server binds to all interfaces; port comes from the `PORT` environment
///   variable (default 5000)
/// - Environment variables loaded from `.env` file (if present)
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();

    let server = HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .configure(signant_health_demo::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((BIND_ADDRESS, config.port))?;

    info!("Server running on port {}", config.port);

    server.run().await
}
