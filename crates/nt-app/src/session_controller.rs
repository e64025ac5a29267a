//! Session controller
//!
//! The session/onboarding gate state machine. Owns the [`SessionState`]
//! snapshot, publishes every mutation through a `watch` channel so the
//! presentation layer can re-run the route gate, and coordinates the
//! asynchronous pieces around it:
//!
//! - the splash **floor timer**: `is_loading` drops only after *both* the
//!   network/cache work has settled *and* the configured minimum splash
//!   duration has elapsed — a `max` of two completion events, never a
//!   `min`;
//! - **stale-response rejection**: operations capture an epoch at entry and
//!   logout bumps it, so a login resolving after a logout can neither
//!   mutate state nor re-write the cleared credential store;
//! - best-effort **dashboard preloading** during the splash period, always
//!   absorbed on failure.
//!
//! No operation is cancellable once started; consistency comes from the
//! epoch check at every continuation, not from aborting work in flight.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use nt_core::onboarding::OnboardingDraft;
use nt_core::ports::{AuthSession, CredentialStorePort, DashboardApiPort, SessionApiPort};
use nt_core::session::{decide_route, AppRoute, SessionState};
use nt_core::user::UserRecord;

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::preloader::DashboardPreloader;

pub struct SessionController {
    api: Arc<dyn SessionApiPort>,
    credentials: Arc<dyn CredentialStorePort>,
    preloader: DashboardPreloader,
    config: SessionConfig,
    state: watch::Sender<SessionState>,
    /// Bumped by logout. Async continuations compare their captured value
    /// against it before committing anything.
    epoch: AtomicU64,
}

impl SessionController {
    pub fn new(
        api: Arc<dyn SessionApiPort>,
        credentials: Arc<dyn CredentialStorePort>,
        dashboard: Arc<dyn DashboardApiPort>,
        config: SessionConfig,
    ) -> Self {
        let (state, _) = watch::channel(SessionState::booting());
        Self {
            api,
            credentials,
            preloader: DashboardPreloader::new(dashboard),
            config,
            state,
            epoch: AtomicU64::new(0),
        }
    }

    /// Subscribe to state changes. The presentation layer re-evaluates the
    /// route gate on every received value.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Clone of the current state.
    pub fn current(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Route gate applied to the current state.
    pub fn route(&self) -> AppRoute {
        decide_route(&self.state.borrow())
    }

    /// Restore the session from the credential store, refreshing the cached
    /// user in the background and warming the dashboard when possible.
    ///
    /// All failures are absorbed: a failed refresh keeps the cached record
    /// (availability over freshness — a transient blip must never boot a
    /// logged-in user), and a failed preload just leaves the snapshot out.
    /// The splash stays up for at least the configured floor regardless of
    /// how fast this settles.
    pub async fn bootstrap(&self) {
        let epoch = self.current_epoch();
        let started = Instant::now();
        self.state.send_modify(|s| s.is_loading = true);

        let stored = match self.credentials.load().await {
            Ok(stored) => stored,
            Err(err) => {
                warn!(error = %err, "credential store unreadable, starting signed out");
                None
            }
        };

        let restored = match stored {
            Some(stored) => {
                let token = stored.token;
                let user = match self.api.fetch_current_user(&token).await {
                    Ok(fresh) => {
                        if !self.is_stale(epoch) {
                            if let Err(err) = self.credentials.store(&token, &fresh).await {
                                warn!(error = %err, "failed to re-persist refreshed user");
                            }
                        }
                        fresh
                    }
                    Err(err) => {
                        warn!(error = %err, "background refresh failed, keeping cached user");
                        stored.user
                    }
                };
                let snapshot = if user.profile_completed {
                    self.preloader
                        .preload(&token, self.config.preload_day_window)
                        .await
                } else {
                    None
                };
                Some((token, user, snapshot))
            }
            None => None,
        };

        self.hold_splash_floor(started).await;
        if self.is_stale(epoch) {
            debug!("bootstrap superseded by logout, discarding");
            return;
        }

        self.state.send_modify(|s| {
            if let Some((token, user, snapshot)) = restored {
                info!(user_id = user.id, "session restored");
                s.token = Some(token);
                s.user = Some(user);
                s.preloaded_dashboard = snapshot;
                s.is_authenticated = true;
            }
            s.is_loading = false;
        });
    }

    /// Authenticate with email/password.
    ///
    /// Success honors the splash floor and flips `is_authenticated` and
    /// `is_loading` in one atomic state publish so subscribers never
    /// observe authenticated-but-loading flicker. Failure resolves
    /// immediately with no floor wait and comes back as a value.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), SessionError> {
        let epoch = self.current_epoch();
        let started = Instant::now();
        self.state.send_modify(|s| s.is_loading = true);

        match self.api.authenticate(email, password).await {
            Ok(auth) => self.commit_authenticated(epoch, started, auth).await,
            Err(err) => {
                // Visible failures are instantaneous: no floor timer.
                self.state.send_modify(|s| s.is_loading = false);
                Err(err.into())
            }
        }
    }

    /// Create an account and sign in. New accounts always route to
    /// onboarding next, since registration never completes a profile.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<(), SessionError> {
        let epoch = self.current_epoch();
        let started = Instant::now();
        self.state.send_modify(|s| s.is_loading = true);

        match self.api.register(email, password, full_name).await {
            Ok(auth) => self.commit_authenticated(epoch, started, auth).await,
            Err(err) => {
                self.state.send_modify(|s| s.is_loading = false);
                Err(err.into())
            }
        }
    }

    /// Start a guest session: synchronous, local-only, nothing persisted
    /// and nothing fetched.
    pub fn login_as_guest(&self) {
        info!("starting guest session");
        self.state.send_modify(|s| {
            *s = SessionState::signed_out();
            s.user = Some(UserRecord::guest());
            s.is_guest = true;
            s.is_authenticated = true;
        });
    }

    /// Best-effort re-fetch of the current user. On failure the state
    /// falls back to whatever the credential store holds; a failed refresh
    /// never signs anyone out.
    pub async fn refresh(&self) {
        let epoch = self.current_epoch();
        let token = {
            let s = self.state.borrow();
            if s.is_guest {
                return;
            }
            s.token.clone()
        };
        let Some(token) = token else { return };

        match self.api.fetch_current_user(&token).await {
            Ok(fresh) => {
                if self.is_stale(epoch) {
                    return;
                }
                if let Err(err) = self.credentials.store(&token, &fresh).await {
                    warn!(error = %err, "failed to re-persist refreshed user");
                }
                self.state.send_modify(|s| s.user = Some(fresh));
            }
            Err(err) => {
                warn!(error = %err, "refresh failed, falling back to stored user");
                if let Ok(Some(stored)) = self.credentials.load().await {
                    if self.is_stale(epoch) {
                        return;
                    }
                    self.state.send_modify(|s| s.user = Some(stored.user));
                }
            }
        }
    }

    /// Clear the stored session and return to the auth flow immediately
    /// (no splash). Any operation still in flight becomes stale and its
    /// result is discarded.
    pub async fn logout(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        if let Err(err) = self.credentials.clear().await {
            warn!(error = %err, "failed to clear credential store");
        }
        self.state.send_modify(|s| *s = SessionState::signed_out());
        info!("session cleared");
    }

    /// Route an already-onboarded user back into the onboarding flow.
    pub fn enter_onboarding_override(&self) {
        self.state.send_modify(|s| s.viewing_results_override = true);
    }

    /// Leave the re-run wizard; routes straight back to main without
    /// re-authentication.
    pub fn exit_onboarding_override(&self) {
        self.state.send_modify(|s| s.viewing_results_override = false);
    }

    /// Re-run the wizard: clear the draft and raise the override.
    pub fn restart_onboarding(&self, draft: &mut OnboardingDraft) {
        draft.reset();
        self.enter_onboarding_override();
    }

    /// Submit the completed wizard.
    ///
    /// Incomplete or invalid drafts are rejected without a network call.
    /// On failure the draft is left untouched for retry. On success the
    /// session user is replaced wholesale with the server-computed record,
    /// the credential cache is re-persisted, and the fresh record is
    /// parked in the draft's `finalized_user` slot for the results step.
    pub async fn submit_onboarding(
        &self,
        draft: &mut OnboardingDraft,
    ) -> Result<(), SessionError> {
        draft.validate()?;
        let submission = draft.to_submission()?;

        let token = {
            let s = self.state.borrow();
            if s.is_guest {
                return Err(SessionError::GuestSession);
            }
            s.token.clone().ok_or(SessionError::NotAuthenticated)?
        };

        let epoch = self.current_epoch();
        let user = self.api.submit_onboarding(&token, &submission).await?;

        if self.is_stale(epoch) {
            debug!("onboarding submission superseded by logout, discarding");
            return Ok(());
        }
        if let Err(err) = self.credentials.store(&token, &user).await {
            warn!(error = %err, "failed to persist onboarded user");
        }
        info!(user_id = user.id, "onboarding completed");
        draft.finalized_user = Some(user.clone());
        self.state.send_modify(|s| s.user = Some(user));
        Ok(())
    }

    /// Shared success path for login/register: persist, preload, honor the
    /// splash floor, then publish the authenticated state atomically.
    async fn commit_authenticated(
        &self,
        epoch: u64,
        started: Instant,
        auth: AuthSession,
    ) -> Result<(), SessionError> {
        if self.is_stale(epoch) {
            debug!("authentication superseded by logout, discarding response");
            return Ok(());
        }
        if let Err(err) = self.credentials.store(&auth.token, &auth.user).await {
            warn!(error = %err, "failed to persist credentials");
        }

        let snapshot = if auth.user.profile_completed {
            self.preloader
                .preload(&auth.token, self.config.preload_day_window)
                .await
        } else {
            None
        };

        self.hold_splash_floor(started).await;
        if self.is_stale(epoch) {
            debug!("authentication superseded by logout, discarding response");
            return Ok(());
        }

        info!(user_id = auth.user.id, "authentication succeeded");
        self.state.send_modify(|s| {
            s.token = Some(auth.token);
            s.user = Some(auth.user);
            s.preloaded_dashboard = snapshot;
            s.is_guest = false;
            s.viewing_results_override = false;
            s.is_authenticated = true;
            s.is_loading = false;
        });
        Ok(())
    }

    /// Wait out the remainder of the splash floor, if any. Settled work
    /// never shortens the floor; slow work never lengthens it.
    async fn hold_splash_floor(&self, started: Instant) {
        let elapsed = started.elapsed();
        if let Some(remaining) = self.config.min_splash.checked_sub(elapsed) {
            tokio::time::sleep(remaining).await;
        }
    }

    fn current_epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    fn is_stale(&self, epoch: u64) -> bool {
        self.current_epoch() != epoch
    }
}
