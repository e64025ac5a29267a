use std::time::Duration;

/// Tunables for the session controller.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Minimum time the splash stays visible once bootstrap/login starts.
    /// A floor, not a ceiling: slow work extends the splash past it.
    pub min_splash: Duration,
    /// Day window handed to the dashboard preloader (1 = today).
    pub preload_day_window: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_splash: Duration::from_millis(1500),
            preload_day_window: 1,
        }
    }
}
