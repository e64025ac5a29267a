//! Onboarding draft
//!
//! Accumulator for the answers collected across the ordered wizard steps.
//! Each step screen writes one field; steps may be revisited via back
//! navigation without disturbing later answers. The draft is owned by the
//! onboarding flow alone: created empty, finalized into a server
//! submission once complete, and explicitly reset whenever the wizard
//! starts or restarts.

use serde::Serialize;
use thiserror::Error;

use crate::user::{
    ActivityLevel, FitnessGoal, Gender, LiftingExperience, MedicalCondition, UserRecord, Weekday,
};

/// Range limits enforced client-side, mirroring the submission endpoint.
pub const AGE_RANGE: std::ops::RangeInclusive<u32> = 13..=120;
pub const HEIGHT_CM_RANGE: std::ops::RangeInclusive<u32> = 100..=250;
pub const WEIGHT_KG_RANGE: std::ops::RangeInclusive<f64> = 30.0..=300.0;

/// In-progress onboarding answers.
///
/// Multi-select fields start empty, scalars start unset. A reset draft
/// must compare equal to a freshly constructed one; a partially-reset
/// draft is a correctness bug.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OnboardingDraft {
    pub fitness_goals: Vec<FitnessGoal>,
    pub gender: Option<Gender>,
    /// Ingredient ids, optional step.
    pub food_allergies: Vec<i64>,
    /// Optional step.
    pub medical_conditions: Vec<MedicalCondition>,
    pub activity_level: Option<ActivityLevel>,
    pub lifting_experience: Option<LiftingExperience>,
    pub age: Option<u32>,
    pub height_cm: Option<u32>,
    pub weight_kg: Option<f64>,
    pub workout_days: Vec<Weekday>,
    /// Hand-off slot for the results step: the server-computed record
    /// returned by a successful submission. Never part of the submission
    /// itself.
    pub finalized_user: Option<UserRecord>,
}

/// Projection of a complete draft into the shape the submission endpoint
/// expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OnboardingSubmission {
    pub fitness_goals: Vec<FitnessGoal>,
    pub gender: Gender,
    pub food_allergies: Vec<i64>,
    pub medical_conditions: Vec<MedicalCondition>,
    pub activity_level: ActivityLevel,
    pub lifting_experience: LiftingExperience,
    pub age: u32,
    pub height: u32,
    pub weight: f64,
    pub workout_days: Vec<Weekday>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftError {
    #[error("missing required fields: {0:?}")]
    MissingFields(Vec<&'static str>),
    #[error("age must be between 13 and 120 years")]
    AgeOutOfRange,
    #[error("height must be between 100 and 250 cm")]
    HeightOutOfRange,
    #[error("weight must be between 30 and 300 kg")]
    WeightOutOfRange,
    #[error("conditions not applicable to male profiles: {0:?}")]
    ConditionsNotApplicable(Vec<MedicalCondition>),
}

impl OnboardingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every field back to its initial empty value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Required fields that are still unset or empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.fitness_goals.is_empty() {
            missing.push("fitness_goals");
        }
        if self.gender.is_none() {
            missing.push("gender");
        }
        if self.activity_level.is_none() {
            missing.push("activity_level");
        }
        if self.lifting_experience.is_none() {
            missing.push("lifting_experience");
        }
        if self.age.is_none() {
            missing.push("age");
        }
        if self.height_cm.is_none() {
            missing.push("height");
        }
        if self.weight_kg.is_none() {
            missing.push("weight");
        }
        if self.workout_days.is_empty() {
            missing.push("workout_days");
        }
        missing
    }

    /// True once every required field is set. Allergies and medical
    /// conditions are optional steps.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Enforce the submission endpoint's rules before going to the
    /// network, so step screens can flag problems early.
    pub fn validate(&self) -> Result<(), DraftError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(DraftError::MissingFields(missing));
        }
        if self.age.is_some_and(|age| !AGE_RANGE.contains(&age)) {
            return Err(DraftError::AgeOutOfRange);
        }
        if self.height_cm.is_some_and(|h| !HEIGHT_CM_RANGE.contains(&h)) {
            return Err(DraftError::HeightOutOfRange);
        }
        if self.weight_kg.is_some_and(|w| !WEIGHT_KG_RANGE.contains(&w)) {
            return Err(DraftError::WeightOutOfRange);
        }
        if self.gender == Some(Gender::Male) {
            let not_applicable: Vec<_> = self
                .medical_conditions
                .iter()
                .copied()
                .filter(|c| c.is_female_only())
                .collect();
            if !not_applicable.is_empty() {
                return Err(DraftError::ConditionsNotApplicable(not_applicable));
            }
        }
        Ok(())
    }

    /// Project the draft into a submission payload, dropping the transient
    /// `finalized_user` slot.
    pub fn to_submission(&self) -> Result<OnboardingSubmission, DraftError> {
        let (
            Some(gender),
            Some(activity_level),
            Some(lifting_experience),
            Some(age),
            Some(height),
            Some(weight),
        ) = (
            self.gender,
            self.activity_level,
            self.lifting_experience,
            self.age,
            self.height_cm,
            self.weight_kg,
        )
        else {
            return Err(DraftError::MissingFields(self.missing_fields()));
        };
        if self.fitness_goals.is_empty() || self.workout_days.is_empty() {
            return Err(DraftError::MissingFields(self.missing_fields()));
        }
        Ok(OnboardingSubmission {
            fitness_goals: self.fitness_goals.clone(),
            gender,
            food_allergies: self.food_allergies.clone(),
            medical_conditions: self.medical_conditions.clone(),
            activity_level,
            lifting_experience,
            age,
            height,
            weight,
            workout_days: self.workout_days.clone(),
        })
    }
}
