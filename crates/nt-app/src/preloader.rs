//! Dashboard preloader
//!
//! Warms the first main-flow screen during the splash period by fetching
//! today's meals and today's nutrition aggregates. The two reads are
//! independent and are issued concurrently; success is both-or-neither.
//! Preloading is purely an optimization, so every failure collapses to an
//! absent snapshot instead of propagating.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use nt_core::dashboard::DashboardSnapshot;
use nt_core::ports::DashboardApiPort;

pub struct DashboardPreloader {
    api: Arc<dyn DashboardApiPort>,
}

impl DashboardPreloader {
    pub fn new(api: Arc<dyn DashboardApiPort>) -> Self {
        Self { api }
    }

    /// Fetch both dashboard reads concurrently and join them.
    ///
    /// Returns `None` if either fetch fails. Must not be called for guest
    /// sessions; there is no authenticated scope to preload.
    pub async fn preload(&self, token: &str, day_window: u32) -> Option<DashboardSnapshot> {
        let (meals, stats) = tokio::join!(
            self.api.meal_history(token, day_window),
            self.api.nutrition_stats(token, day_window),
        );

        match (meals, stats) {
            (Ok(today_meals), Ok(today_stats)) => Some(DashboardSnapshot {
                today_meals,
                today_stats,
                loaded_at: Utc::now(),
            }),
            (meals, stats) => {
                debug!(
                    meals_ok = meals.is_ok(),
                    stats_ok = stats.is_ok(),
                    "dashboard preload failed, continuing without a snapshot"
                );
                None
            }
        }
    }
}
