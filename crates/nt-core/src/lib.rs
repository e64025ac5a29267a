//! # nt-core
//!
//! Core domain models and business logic for NutriTrack.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod dashboard;
pub mod onboarding;
pub mod ports;
pub mod session;
pub mod user;

// Re-export commonly used types at the crate root
pub use dashboard::{DashboardSnapshot, MealEntry, NutritionStats};
pub use onboarding::{DraftError, OnboardingDraft, OnboardingSubmission};
pub use session::{decide_route, AppRoute, SessionState};
pub use user::{NutritionTargets, ProfileData, UserRecord};
