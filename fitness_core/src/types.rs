//! Core domain types for the fitness journal.
//!
//! This module defines the entries a user records during a run:
//! - Goals and their progress percentage
//! - Workouts (cardio or strength)
//! - Meals and their nutrients

use crate::{Error, NutrientOrder, Result};
use serde::Serialize;
use std::fmt::Write as _;

/// Render a real number the way the report prints it: shortest form that
/// round-trips, always with a decimal point (`20.0`, `12.5`).
pub fn format_real(value: f64) -> String {
    format!("{:?}", value)
}

// ============================================================================
// Goal
// ============================================================================

/// A numeric goal such as a target weight or weekly distance
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Goal {
    goal_type: String,
    target_value: f64,
    current_value: f64,
}

impl Goal {
    /// Create a goal
    ///
    /// Returns an error if the target is zero or not finite, since no
    /// progress percentage can be computed against it.
    pub fn new(goal_type: impl Into<String>, target_value: f64, current_value: f64) -> Result<Self> {
        let goal_type = goal_type.into();
        if target_value == 0.0 || !target_value.is_finite() {
            return Err(Error::InvalidGoal(format!(
                "target value for {:?} must be a non-zero number, got {}",
                goal_type, target_value
            )));
        }

        Ok(Self {
            goal_type,
            target_value,
            current_value,
        })
    }

    pub fn goal_type(&self) -> &str {
        &self.goal_type
    }

    pub fn target_value(&self) -> f64 {
        self.target_value
    }

    pub fn current_value(&self) -> f64 {
        self.current_value
    }

    /// Percentage of the target reached so far
    pub fn check_progress(&self) -> f64 {
        self.current_value / self.target_value * 100.0
    }
}

// ============================================================================
// Workout
// ============================================================================

/// Variant-specific workout data
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkoutKind {
    Cardio { distance_km: i32 },
    Strength { sets: i32, reps: i32 },
}

/// Which variant the user asked for, before its fields are collected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkoutCategory {
    Cardio,
    Strength,
}

impl WorkoutCategory {
    /// Case-insensitive match against "Cardio" or "Strength"
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cardio" => Some(WorkoutCategory::Cardio),
            "strength" => Some(WorkoutCategory::Strength),
            _ => None,
        }
    }
}

/// A single recorded workout
///
/// Values are stored as given; intensity is meant to be 1-10 but is not
/// checked, and neither are negative durations or counts.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Workout {
    name: String,
    duration_minutes: i32,
    intensity: i32,
    #[serde(flatten)]
    kind: WorkoutKind,
}

impl Workout {
    pub fn cardio(name: impl Into<String>, duration_minutes: i32, intensity: i32, distance_km: i32) -> Self {
        Self {
            name: name.into(),
            duration_minutes,
            intensity,
            kind: WorkoutKind::Cardio { distance_km },
        }
    }

    pub fn strength(
        name: impl Into<String>,
        duration_minutes: i32,
        intensity: i32,
        sets: i32,
        reps: i32,
    ) -> Self {
        Self {
            name: name.into(),
            duration_minutes,
            intensity,
            kind: WorkoutKind::Strength { sets, reps },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration_minutes(&self) -> i32 {
        self.duration_minutes
    }

    pub fn intensity(&self) -> i32 {
        self.intensity
    }

    pub fn kind(&self) -> &WorkoutKind {
        &self.kind
    }

    /// One-line description of the workout
    pub fn details(&self) -> String {
        match self.kind {
            WorkoutKind::Cardio { distance_km } => format!(
                "Cardio workout: {} for {} minutes at intensity {} with distance {} km.",
                self.name, self.duration_minutes, self.intensity, distance_km
            ),
            WorkoutKind::Strength { sets, reps } => format!(
                "Strength training: {} for {} minutes at intensity {} with {} sets and {} reps.",
                self.name, self.duration_minutes, self.intensity, sets, reps
            ),
        }
    }
}

// ============================================================================
// Diet
// ============================================================================

/// Amount of one nutrient in a meal
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Nutrient {
    pub name: String,
    pub amount: f64,
}

/// A meal with its calories and nutrients
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Diet {
    meal_type: String,
    calories: i32,
    nutrients: Vec<Nutrient>,
}

impl Diet {
    /// Create a meal entry
    ///
    /// Nutrient names are unique: a repeated name keeps its first position
    /// and takes the last amount given.
    pub fn new<I, S>(meal_type: impl Into<String>, calories: i32, nutrients: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut unique: Vec<Nutrient> = Vec::new();
        for (name, amount) in nutrients {
            let name = name.into();
            match unique.iter_mut().find(|n| n.name == name) {
                Some(existing) => {
                    tracing::debug!("Nutrient {:?} entered twice, keeping {}", name, amount);
                    existing.amount = amount;
                }
                None => unique.push(Nutrient { name, amount }),
            }
        }

        Self {
            meal_type: meal_type.into(),
            calories,
            nutrients: unique,
        }
    }

    pub fn meal_type(&self) -> &str {
        &self.meal_type
    }

    pub fn calories(&self) -> i32 {
        self.calories
    }

    /// Nutrients in the order they were entered
    pub fn nutrients(&self) -> &[Nutrient] {
        &self.nutrients
    }

    pub fn nutrient(&self, name: &str) -> Option<f64> {
        self.nutrients.iter().find(|n| n.name == name).map(|n| n.amount)
    }

    /// One-line summary of the meal, nutrients listed in `order`
    pub fn nutritional_info(&self, order: NutrientOrder) -> String {
        let mut listed: Vec<&Nutrient> = self.nutrients.iter().collect();
        if order == NutrientOrder::Name {
            listed.sort_by(|a, b| a.name.cmp(&b.name));
        }

        let mut info = format!("{} - Calories: {}, Nutrients:", self.meal_type, self.calories);
        for nutrient in listed {
            let _ = write!(info, " {}: {}", nutrient.name, format_real(nutrient.amount));
        }
        info
    }
}
