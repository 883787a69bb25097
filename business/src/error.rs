use thiserror::Error;

/// Failure of a single request made through [`crate::http::server_request`].
///
/// An application-level rejection (`{"success": false}`) is not an error: it
/// is a decoded response and is reported through [`crate::users::Mutation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The request never produced a response (connection refused, DNS, CORS...).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("API returned status: {status}")]
    Status { status: u16 },

    /// The body was not JSON, or not the JSON shape we expected.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The payload could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration from environment: {0}")]
    Env(#[from] serde_env::Error),
}
