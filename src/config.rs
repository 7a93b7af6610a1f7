use std::env;

/// Default listen port when `PORT` is unset or unparseable.
pub const DEFAULT_PORT: u16 = 5000;

/// Address the server binds to. All interfaces, so the service is reachable
/// from outside its container.
pub const BIND_ADDRESS: &str = "0.0.0.0";

/// # Server Configuration
///
/// Listen settings resolved from the environment at startup.
///
/// ## Fields
/// - `port`: TCP port, taken from the `PORT` environment variable
///   (default 5000)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Resolves the configuration from the process environment.
    ///
    /// `PORT` values that are missing or fail to parse as a `u16` fall back
    /// to [`DEFAULT_PORT`].
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { port }
    }
}
