use thiserror::Error;

use crate::http::HttpError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read environment: {0}")]
    Env(#[from] serde_env::Error),
    #[error("Login path must start with '/', got {0:?}")]
    InvalidLoginPath(String),
}

/// A submission that never produced a usable answer from the backend.
///
/// Every variant ends up as the same network-error line in the view;
/// the detail is only logged.
#[derive(Debug, Error)]
pub enum LoginError {
    #[error(transparent)]
    Transport(#[from] HttpError),
    #[error("Failed to encode login request: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Server answered {status} with a body that is not JSON: {source}")]
    MalformedBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
    #[error("Server answered {status} with a null body")]
    NullBody { status: u16 },
}
