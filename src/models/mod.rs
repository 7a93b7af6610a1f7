/// # Health Status Response
///
/// Payload for the `/health` liveness endpoint: service status plus the
/// fixed service identifier.
pub mod health;

/// # Service Info Response
///
/// Payload for the `/info` endpoint: service title, version, and the
/// timestamp of the request.
pub mod info;

/// # Welcome Response
///
/// Payload for the root endpoint: welcome message plus the fixed service
/// identifier.
pub mod root;

pub use health::HealthResponse;
pub use info::InfoResponse;
pub use root::WelcomeResponse;
