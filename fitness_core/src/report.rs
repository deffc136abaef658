//! Progress report rendering.
//!
//! The text report looks like:
//!
//! ```text
//! User: Alex
//! Workouts:
//! Cardio workout: Run for 30 minutes at intensity 7 with distance 5 km.
//! Diets:
//! Breakfast - Calories: 400, Nutrients: Protein: 20.0 Carbs: 50.0
//! Goal: 40.0%
//! ```
//!
//! The goal line is left out when no goal is set.

use crate::types::format_real;
use crate::{Goal, ReportConfig, Result, User};
use serde::Serialize;
use std::fmt::Write as _;

/// Render the text progress report for a user
pub fn render_progress(user: &User, config: &ReportConfig) -> String {
    let mut report = String::new();

    let _ = writeln!(report, "User: {}", user.name());

    report.push_str("Workouts:\n");
    for workout in user.workouts() {
        let _ = writeln!(report, "{}", workout.details());
    }

    report.push_str("Diets:\n");
    for diet in user.diets() {
        let _ = writeln!(report, "{}", diet.nutritional_info(config.nutrient_order));
    }

    if let Some(goal) = user.goal() {
        let _ = writeln!(
            report,
            "Goal: {}%",
            format_progress(goal.check_progress(), config.progress_decimals)
        );
    }

    tracing::debug!(
        "Rendered report with {} workouts and {} diets",
        user.workouts().len(),
        user.diets().len()
    );
    report
}

/// Format a progress percentage, optionally to a fixed number of decimals
pub fn format_progress(percent: f64, decimals: Option<usize>) -> String {
    match decimals {
        Some(places) => format!("{:.*}", places, percent),
        None => format_real(percent),
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    user: &'a User,
    goal_progress: Option<f64>,
}

/// Render the whole user aggregate, plus computed goal progress, as JSON
pub fn render_json(user: &User) -> Result<String> {
    let report = JsonReport {
        user,
        goal_progress: user.goal().map(Goal::check_progress),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
