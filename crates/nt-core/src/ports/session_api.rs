//! Remote session API port
//!
//! Network operations the session controller drives: authenticate,
//! register, fetch the current user, and submit the onboarding wizard.

use async_trait::async_trait;

use super::errors::ApiError;
use crate::onboarding::OnboardingSubmission;
use crate::user::UserRecord;

/// A freshly issued token together with the user it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub token: String,
    pub user: UserRecord,
}

#[async_trait]
pub trait SessionApiPort: Send + Sync {
    /// Exchange credentials for a token and user record.
    async fn authenticate(&self, email: &str, password: &str) -> Result<AuthSession, ApiError>;

    /// Create an account. New users always come back with
    /// `profile_completed == false`.
    async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<AuthSession, ApiError>;

    /// Fetch the current user for a token.
    async fn fetch_current_user(&self, token: &str) -> Result<UserRecord, ApiError>;

    /// Submit the completed wizard. The server computes nutrition targets
    /// and returns the user with `profile_completed == true`.
    async fn submit_onboarding(
        &self,
        token: &str,
        submission: &OnboardingSubmission,
    ) -> Result<UserRecord, ApiError>;
}
