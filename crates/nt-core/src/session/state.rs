use serde::{Deserialize, Serialize};

use crate::dashboard::DashboardSnapshot;
use crate::user::UserRecord;

/// Snapshot of the session at one instant.
///
/// Invariants:
/// - `is_authenticated` implies `user` is present.
/// - `is_guest` implies `token` is absent; guest sessions are never
///   persisted and never reach the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserRecord>,
    /// While set, the splash flow is shown and everything else is hidden.
    pub is_loading: bool,
    pub is_authenticated: bool,
    pub is_guest: bool,
    /// Routes an already-onboarded user back into the onboarding flow,
    /// used when the wizard is deliberately re-run to view results.
    pub viewing_results_override: bool,
    /// Advisory warm-up cache for the first main screen. Absence never
    /// blocks navigation.
    pub preloaded_dashboard: Option<DashboardSnapshot>,
}

impl SessionState {
    /// State at process start: splash up, nothing known yet.
    pub fn booting() -> Self {
        Self {
            is_loading: true,
            ..Self::signed_out()
        }
    }

    /// Empty state after logout. The auth flow appears immediately, so
    /// `is_loading` stays off.
    pub fn signed_out() -> Self {
        Self {
            token: None,
            user: None,
            is_loading: false,
            is_authenticated: false,
            is_guest: false,
            viewing_results_override: false,
            preloaded_dashboard: None,
        }
    }

    /// Whether the loaded user has completed onboarding.
    pub fn profile_completed(&self) -> bool {
        self.user.as_ref().map(|u| u.profile_completed).unwrap_or(false)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::booting()
    }
}
