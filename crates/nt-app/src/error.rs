use thiserror::Error;

use nt_core::onboarding::DraftError;
use nt_core::ports::ApiError;

/// Failures surfaced to the presentation layer.
///
/// Authentication and submission failures come back through here as
/// values; nothing is ever propagated as a panic past the controller
/// boundary. Background refresh and preload failures are absorbed inside
/// the controller and never reach this type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Draft(#[from] DraftError),
    /// The operation needs an authenticated, non-guest session.
    #[error("no authenticated session")]
    NotAuthenticated,
    /// Guest sessions never reach the remote API.
    #[error("guest sessions cannot submit onboarding")]
    GuestSession,
}
