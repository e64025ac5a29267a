//! Dashboard read port
//!
//! Two independent read-only queries parameterized by a day window; with a
//! window of 1 both are scoped to "today". Only the preloader calls these,
//! and only inside an authenticated session.

use async_trait::async_trait;

use super::errors::ApiError;
use crate::dashboard::{MealEntry, NutritionStats};

#[async_trait]
pub trait DashboardApiPort: Send + Sync {
    /// Meals logged in the last `days` days, most recent first.
    async fn meal_history(&self, token: &str, days: u32) -> Result<Vec<MealEntry>, ApiError>;

    /// Nutrition aggregates over the last `days` days.
    async fn nutrition_stats(&self, token: &str, days: u32) -> Result<NutritionStats, ApiError>;
}
