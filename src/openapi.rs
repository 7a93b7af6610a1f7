use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural
/// macros. This documentation serves as the source of truth for both API
/// consumers and automated documentation generators.
///
/// # Endpoints
/// - Root: `GET /`
/// - Health Check: `GET /health`
/// - Service Info: `GET /info`
///
/// # Schemas
/// - `WelcomeResponse`: Root welcome payload
/// - `HealthResponse`: Service status payload
/// - `InfoResponse`: Service metadata payload
///
/// # Note
/// The OpenAPI spec is generated at compile time from these annotations. Any
/// changes to the API surface should be reflected here first to maintain
/// documentation accuracy.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root::index,
        crate::routes::health::health,
        crate::routes::info::info,
    ),
    components(
        schemas(
            crate::models::root::WelcomeResponse,
            crate::models::health::HealthResponse,
            crate::models::info::InfoResponse
        )
    ),
    tags(
        (name = "Root", description = "API welcome endpoint"),
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Service Info", description = "Service metadata endpoints")
    ),
    info(
        description = "Minimal informational API exposing health, info, and welcome endpoints",
        title = "Signant Health Demo API",
        version = "1.0.0",
    )
)]
pub struct ApiDoc;
