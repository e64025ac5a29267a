use serde::{Deserialize, Serialize};

use super::SessionState;

/// Top-level flow selected by the route gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppRoute {
    /// Minimum-duration launch screen while the session settles.
    Splash,
    /// Login / registration / guest entry.
    Auth,
    /// Multi-step profile wizard plus its results screen.
    Onboarding,
    /// The authenticated application.
    Main,
}

/// Pure route gate. Called after every session mutation.
///
/// Precedence is load-bearing and must not be reordered: loading dominates
/// everything, an unauthenticated session dominates profile state, and the
/// results override dominates a completed profile.
///
/// ```text
/// is_loading            ──→ Splash
/// !is_authenticated     ──→ Auth
/// !profile || override  ──→ Onboarding
/// otherwise             ──→ Main
/// ```
pub fn decide_route(state: &SessionState) -> AppRoute {
    if state.is_loading {
        return AppRoute::Splash;
    }
    if !state.is_authenticated {
        return AppRoute::Auth;
    }
    if !state.profile_completed() || state.viewing_results_override {
        return AppRoute::Onboarding;
    }
    AppRoute::Main
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::UserRecord;

    fn user_with(profile_completed: bool) -> UserRecord {
        UserRecord {
            id: 1,
            email: "user@example.com".to_string(),
            full_name: "Test User".to_string(),
            profile_completed,
            profile: None,
            nutrition_targets: None,
            is_guest: false,
        }
    }

    fn state(
        is_loading: bool,
        is_authenticated: bool,
        profile_completed: bool,
        viewing_results_override: bool,
    ) -> SessionState {
        SessionState {
            token: is_authenticated.then(|| "token".to_string()),
            user: Some(user_with(profile_completed)),
            is_loading,
            is_authenticated,
            is_guest: false,
            viewing_results_override,
            preloaded_dashboard: None,
        }
    }

    /// The gate is total: every combination of the four inputs maps to
    /// exactly the flow the precedence order dictates.
    #[test]
    fn test_all_sixteen_combinations() {
        for loading in [false, true] {
            for authenticated in [false, true] {
                for completed in [false, true] {
                    for override_on in [false, true] {
                        let expected = if loading {
                            AppRoute::Splash
                        } else if !authenticated {
                            AppRoute::Auth
                        } else if !completed || override_on {
                            AppRoute::Onboarding
                        } else {
                            AppRoute::Main
                        };

                        let actual = decide_route(&state(
                            loading,
                            authenticated,
                            completed,
                            override_on,
                        ));
                        assert_eq!(
                            actual, expected,
                            "loading={loading} authenticated={authenticated} \
                             completed={completed} override={override_on}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_loading_dominates_everything() {
        assert_eq!(decide_route(&state(true, true, true, true)), AppRoute::Splash);
    }

    #[test]
    fn test_unauthenticated_dominates_profile_state() {
        assert_eq!(decide_route(&state(false, false, true, true)), AppRoute::Auth);
    }

    #[test]
    fn test_override_dominates_completed_profile() {
        assert_eq!(
            decide_route(&state(false, true, true, true)),
            AppRoute::Onboarding
        );
    }

    #[test]
    fn test_missing_user_counts_as_incomplete_profile() {
        let mut s = state(false, true, true, false);
        s.user = None;
        assert_eq!(decide_route(&s), AppRoute::Onboarding);
    }

    #[test]
    fn test_booting_routes_to_splash() {
        assert_eq!(decide_route(&SessionState::booting()), AppRoute::Splash);
    }

    #[test]
    fn test_signed_out_routes_to_auth() {
        assert_eq!(decide_route(&SessionState::signed_out()), AppRoute::Auth);
    }
}
