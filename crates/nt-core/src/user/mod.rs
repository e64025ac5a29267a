//! User domain models
//!
//! This module defines the user record owned by the session layer together
//! with the closed vocabularies collected during onboarding. The record is
//! always replaced wholesale after a successful authenticate/refresh; the
//! only partial mutation allowed anywhere is the onboarding finalize step,
//! which swaps in the server-computed record.

use serde::{Deserialize, Serialize};

/// A user as known to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    /// True once the onboarding wizard has been submitted and accepted.
    pub profile_completed: bool,
    /// Collected profile answers, present after onboarding.
    pub profile: Option<ProfileData>,
    /// Server-computed targets. Never derived client-side.
    pub nutrition_targets: Option<NutritionTargets>,
    /// Guest sessions are local-only: never persisted, never sent upstream.
    #[serde(default)]
    pub is_guest: bool,
}

impl UserRecord {
    /// Synthetic record backing a guest session.
    ///
    /// Guests skip onboarding, so the profile is marked complete even
    /// though no profile data exists.
    pub fn guest() -> Self {
        Self {
            id: 0,
            email: String::new(),
            full_name: "Guest".to_string(),
            profile_completed: true,
            profile: None,
            nutrition_targets: None,
            is_guest: true,
        }
    }
}

/// Profile answers gathered by the onboarding wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    pub fitness_goals: Vec<FitnessGoal>,
    pub gender: Gender,
    pub age: u32,
    pub height_cm: u32,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub lifting_experience: LiftingExperience,
    #[serde(default)]
    pub medical_conditions: Vec<MedicalCondition>,
    /// Ingredient ids the user is allergic to.
    #[serde(default)]
    pub food_allergies: Vec<i64>,
    pub workout_days: Vec<Weekday>,
}

/// Daily nutrition targets computed by the server from the submitted profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    pub bmr: u32,
    pub tdee: u32,
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fats_g: u32,
    pub water_ml: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    ImproveFitness,
    BuildMuscle,
    ShredFat,
    TonedBody,
    WeightLoss,
    ImproveMentalHealth,
    Balance,
    MaintainMuscle,
    CoreStrength,
    OptimizeWorkouts,
    LeanGains,
    HormonesRegulation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicalCondition {
    Hypothyroidism,
    EatingDisorderAnemia,
    EatingDisorderAnorexia,
    EatingDisorderBulimia,
    EatingDisorderCompulsive,
    SpecialMedications,
    PregnancyIntention,
    PolycysticOvary,
    Infertility,
    Acne,
    InsulinResistance,
    Diabetes,
}

impl MedicalCondition {
    /// Conditions the server rejects for male profiles.
    pub fn is_female_only(self) -> bool {
        matches!(self, Self::PregnancyIntention | Self::PolycysticOvary)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little to no exercise, office job
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Strenuous exercise 6-7 days/week
    VeryActive,
    /// Strenuous exercise twice a day
    ExtremelyActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiftingExperience {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}
