use thiserror::Error;

/// Failure taxonomy of the remote API.
///
/// Preload failures never appear here at the session boundary; the
/// preloader absorbs both fetch errors into an absent snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Login rejected the email/password pair.
    #[error("invalid email or password")]
    InvalidCredentials,
    /// The server rejected the submitted payload.
    #[error("validation failed: {0}")]
    Validation(String),
    /// The token is missing, expired, or revoked.
    #[error("unauthorized")]
    Unauthorized,
    /// Transport-level failure; the request may never have arrived.
    #[error("network error: {0}")]
    Network(String),
}
