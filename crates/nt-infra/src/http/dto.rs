//! Wire DTOs for the remote REST API.
//!
//! The server speaks a flat user shape with `target_*`/`calculated_*`
//! columns; the domain groups those into `ProfileData` and
//! `NutritionTargets`. Mapping lives here so the core never sees wire
//! names.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use nt_core::dashboard::{MealEntry, NutritionStats};
use nt_core::user::{
    ActivityLevel, FitnessGoal, Gender, LiftingExperience, MedicalCondition, NutritionTargets,
    ProfileData, UserRecord, Weekday,
};

#[derive(Debug, Deserialize)]
pub(super) struct AuthResponse {
    pub access_token: String,
    pub user: UserDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct UserEnvelope {
    pub user: UserDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct MealsEnvelope {
    pub meals: Vec<MealDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct StatsEnvelope {
    pub stats: NutritionStats,
}

/// Error payload the server attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct UserDto {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub profile_completed: bool,

    // Flat profile columns, present once onboarding is done.
    pub fitness_goals: Option<Vec<FitnessGoal>>,
    pub gender: Option<Gender>,
    pub age: Option<u32>,
    pub height: Option<u32>,
    pub weight: Option<f64>,
    pub activity_level: Option<ActivityLevel>,
    pub lifting_experience: Option<LiftingExperience>,
    #[serde(default)]
    pub medical_conditions: Vec<MedicalCondition>,
    #[serde(default)]
    pub food_allergies: Vec<i64>,
    #[serde(default)]
    pub workout_days: Vec<Weekday>,

    // Server-computed targets.
    pub calculated_bmr: Option<u32>,
    pub calculated_tdee: Option<u32>,
    pub target_calories: Option<u32>,
    pub target_protein: Option<u32>,
    pub target_carbs: Option<u32>,
    pub target_fats: Option<u32>,
    pub target_water: Option<u32>,
}

impl UserDto {
    pub fn into_record(self) -> UserRecord {
        let profile = self.profile();
        let nutrition_targets = self.targets();
        UserRecord {
            id: self.id,
            email: self.email,
            full_name: self.full_name,
            profile_completed: self.profile_completed,
            profile,
            nutrition_targets,
            // The server never issues guest records.
            is_guest: false,
        }
    }

    fn profile(&self) -> Option<ProfileData> {
        Some(ProfileData {
            fitness_goals: self.fitness_goals.clone()?,
            gender: self.gender?,
            age: self.age?,
            height_cm: self.height?,
            weight_kg: self.weight?,
            activity_level: self.activity_level?,
            lifting_experience: self.lifting_experience?,
            medical_conditions: self.medical_conditions.clone(),
            food_allergies: self.food_allergies.clone(),
            workout_days: self.workout_days.clone(),
        })
    }

    fn targets(&self) -> Option<NutritionTargets> {
        Some(NutritionTargets {
            bmr: self.calculated_bmr?,
            tdee: self.calculated_tdee?,
            calories: self.target_calories?,
            protein_g: self.target_protein?,
            carbs_g: self.target_carbs?,
            fats_g: self.target_fats?,
            water_ml: self.target_water?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct MealDto {
    pub id: i64,
    pub meal_type: String,
    pub recipe_name: Option<String>,
    pub calories_logged: f64,
    pub protein_logged: f64,
    pub carbs_logged: f64,
    pub fats_logged: f64,
    pub consumed_at: DateTime<Utc>,
}

impl From<MealDto> for MealEntry {
    fn from(dto: MealDto) -> Self {
        Self {
            id: dto.id,
            meal_type: dto.meal_type,
            recipe_name: dto.recipe_name,
            calories: dto.calories_logged,
            protein_g: dto.protein_logged,
            carbs_g: dto.carbs_logged,
            fats_g: dto.fats_logged,
            consumed_at: dto.consumed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_user_maps_without_profile() {
        let json = r#"{"id": 1, "email": "a@b.c", "full_name": "A"}"#;
        let dto: UserDto = serde_json::from_str(json).unwrap();
        let record = dto.into_record();

        assert!(!record.profile_completed);
        assert!(record.profile.is_none());
        assert!(record.nutrition_targets.is_none());
        assert!(!record.is_guest);
    }

    #[test]
    fn test_onboarded_user_maps_profile_and_targets() {
        let json = r#"{
            "id": 2,
            "email": "a@b.c",
            "full_name": "A",
            "profile_completed": true,
            "fitness_goals": ["build_muscle", "lean_gains"],
            "gender": "male",
            "age": 28,
            "height": 175,
            "weight": 75.5,
            "activity_level": "moderately_active",
            "lifting_experience": "intermediate",
            "medical_conditions": ["hypothyroidism"],
            "food_allergies": [123],
            "workout_days": ["monday", "friday"],
            "calculated_bmr": 1700,
            "calculated_tdee": 2600,
            "target_calories": 2900,
            "target_protein": 180,
            "target_carbs": 320,
            "target_fats": 80,
            "target_water": 3000
        }"#;
        let dto: UserDto = serde_json::from_str(json).unwrap();
        let record = dto.into_record();

        let profile = record.profile.unwrap();
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.height_cm, 175);
        assert_eq!(profile.workout_days, vec![Weekday::Monday, Weekday::Friday]);

        let targets = record.nutrition_targets.unwrap();
        assert_eq!(targets.calories, 2900);
        assert_eq!(targets.water_ml, 3000);
    }

    #[test]
    fn test_partial_profile_columns_map_to_no_profile() {
        // Half-filled rows (e.g. a legacy account) must not fabricate a
        // profile.
        let json = r#"{"id": 3, "email": "a@b.c", "full_name": "A", "gender": "female", "age": 30}"#;
        let dto: UserDto = serde_json::from_str(json).unwrap();

        assert!(dto.into_record().profile.is_none());
    }
}
