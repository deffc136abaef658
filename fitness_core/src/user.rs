//! The user profile and everything recorded against it.

use crate::report::render_progress;
use crate::{Diet, Goal, ReportConfig, Workout};
use serde::Serialize;

/// A user with their profile, workouts, meals and (at most one) goal
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct User {
    name: String,
    age: i32,
    weight_kg: f64,
    height_cm: f64,
    workouts: Vec<Workout>,
    diets: Vec<Diet>,
    goal: Option<Goal>,
}

impl User {
    pub fn new(name: impl Into<String>, age: i32, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            name: name.into(),
            age,
            weight_kg,
            height_cm,
            workouts: Vec::new(),
            diets: Vec::new(),
            goal: None,
        }
    }

    /// Overwrite all four profile fields
    pub fn update_profile(&mut self, name: impl Into<String>, age: i32, weight_kg: f64, height_cm: f64) {
        self.name = name.into();
        self.age = age;
        self.weight_kg = weight_kg;
        self.height_cm = height_cm;
        tracing::debug!("Updated profile for {}", self.name);
    }

    /// Set the goal, replacing any previous one
    pub fn set_goal(&mut self, goal: Goal) {
        if let Some(previous) = self.goal.replace(goal) {
            tracing::debug!("Replaced goal {:?}", previous.goal_type());
        }
    }

    pub fn add_workout(&mut self, workout: Workout) {
        self.workouts.push(workout);
    }

    pub fn add_diet(&mut self, diet: Diet) {
        self.diets.push(diet);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn diets(&self) -> &[Diet] {
        &self.diets
    }

    pub fn goal(&self) -> Option<&Goal> {
        self.goal.as_ref()
    }

    /// Progress report with default report settings
    pub fn view_progress(&self) -> String {
        render_progress(self, &ReportConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new("Alex", 30, 72.5, 178.0)
    }

    #[test]
    fn test_new_user_is_empty() {
        let user = sample_user();
        assert_eq!(user.name(), "Alex");
        assert!(user.workouts().is_empty());
        assert!(user.diets().is_empty());
        assert!(user.goal().is_none());
    }

    #[test]
    fn test_update_profile_overwrites_all_fields() {
        let mut user = sample_user();
        user.add_workout(Workout::cardio("Run", 30, 7, 5));
        user.update_profile("Sam", 41, 80.0, 165.5);

        assert_eq!(user.name(), "Sam");
        assert_eq!(user.age(), 41);
        assert_eq!(user.weight_kg(), 80.0);
        assert_eq!(user.height_cm(), 165.5);
        // Entries are untouched
        assert_eq!(user.workouts().len(), 1);
    }

    #[test]
    fn test_set_goal_replaces_existing() {
        let mut user = sample_user();
        user.set_goal(Goal::new("Weight Loss", 10.0, 2.0).unwrap());
        user.set_goal(Goal::new("Distance", 100.0, 25.0).unwrap());

        let goal = user.goal().unwrap();
        assert_eq!(goal.goal_type(), "Distance");
        assert!((goal.check_progress() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut user = sample_user();
        user.add_workout(Workout::cardio("Run", 30, 7, 5));
        user.add_workout(Workout::strength("Bench", 45, 8, 4, 10));
        user.add_diet(Diet::new("Breakfast", 400, [("Protein", 20.0)]));
        user.add_diet(Diet::new("Dinner", 800, [("Carbs", 90.0)]));

        let names: Vec<_> = user.workouts().iter().map(|w| w.name()).collect();
        assert_eq!(names, ["Run", "Bench"]);
        let meals: Vec<_> = user.diets().iter().map(|d| d.meal_type()).collect();
        assert_eq!(meals, ["Breakfast", "Dinner"]);
    }
}
