use thiserror::Error;

/// Errors from the external ESI-compatible game data and market services.
#[derive(Error, Debug)]
pub enum EsiError {
    /// Transport-level request error (connection, TLS, body decoding).
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    /// The service answered with a non-success status code.
    #[error("ESI request to {url} returned status {status}")]
    Status {
        /// Status code of the response.
        status: reqwest::StatusCode,
        /// Full request URL.
        url: String,
    },
    /// The bounded external call exceeded its deadline.
    #[error("ESI request timed out after {0:?}")]
    Timeout(std::time::Duration),
}
