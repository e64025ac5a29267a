//! Dashboard domain models
//!
//! The "first screen" data warmed up during the splash period: today's
//! logged meals and today's nutrition aggregates. The snapshot is a purely
//! advisory cache; the main flow must render correctly without one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Preloaded first-screen data, or absent if preloading failed or was
/// skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub today_meals: Vec<MealEntry>,
    pub today_stats: NutritionStats,
    /// Wall-clock time the snapshot was assembled.
    pub loaded_at: DateTime<Utc>,
}

/// One logged meal as returned by the history endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    pub id: i64,
    /// breakfast / lunch / dinner / snack; left open for server additions.
    pub meal_type: String,
    pub recipe_name: Option<String>,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
    pub consumed_at: DateTime<Utc>,
}

/// Aggregates for a day window as returned by the stats endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionStats {
    pub total_meals: u32,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fats: f64,
    pub avg_calories_per_day: f64,
    pub avg_protein_per_day: f64,
    pub avg_carbs_per_day: f64,
    pub avg_fats_per_day: f64,
}
