//! Interactive journal session.
//!
//! Walks the user through one run of the journal: profile, goal, a single
//! workout and a single meal, in that order. The first error ends the run.
//!
//! Numbers that belong together may share a line (`72.5 178`, `4 10`); the
//! rest of a line is dropped once the numbers of a group are read, so the
//! next text answer starts on a fresh line.

use crate::prompt::{Field, Prompter};
use crate::{
    Config, Diet, Error, Goal, Result, UnknownWorkoutPolicy, User, Workout, WorkoutCategory,
};
use std::io::{BufRead, Write};

/// Collect a complete user from the prompter
pub fn collect_user<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &Config,
) -> Result<User> {
    let mut user = collect_profile(prompter)?;

    let goal = collect_goal(prompter)?;
    user.set_goal(goal);

    if let Some(workout) = collect_workout(prompter, config.workout.unknown_kind)? {
        user.add_workout(workout);
    }

    let diet = collect_diet(prompter)?;
    user.add_diet(diet);

    tracing::info!(
        "Collected journal for {}: {} workout(s), {} meal(s)",
        user.name(),
        user.workouts().len(),
        user.diets().len()
    );
    Ok(user)
}

fn collect_profile<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<User> {
    let name = prompter.text(Field::Name)?;
    let age = prompter.integer(Field::Age)?;
    let weight = prompter.real(Field::Weight)?;
    let height = prompter.real(Field::Height)?;
    prompter.finish_line();
    Ok(User::new(name, age, weight, height))
}

fn collect_goal<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<Goal> {
    let goal_type = prompter.text(Field::GoalType)?;
    let target = prompter.real(Field::TargetValue)?;
    let current = prompter.real(Field::CurrentValue)?;
    prompter.finish_line();
    Goal::new(goal_type, target, current)
}

/// Ask for one workout
///
/// The shared fields are always asked for. Returns `Ok(None)` when the type
/// is not recognized and the policy is to skip.
fn collect_workout<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    policy: UnknownWorkoutPolicy,
) -> Result<Option<Workout>> {
    let kind = prompter.text(Field::WorkoutKind)?;
    let name = prompter.text(Field::WorkoutName)?;
    let duration = prompter.integer(Field::Duration)?;
    let intensity = prompter.integer(Field::Intensity)?;
    prompter.finish_line();

    let workout = match WorkoutCategory::parse(&kind) {
        Some(WorkoutCategory::Cardio) => {
            let distance = prompter.integer(Field::Distance)?;
            prompter.finish_line();
            Workout::cardio(name, duration, intensity, distance)
        }
        Some(WorkoutCategory::Strength) => {
            let sets = prompter.integer(Field::Sets)?;
            let reps = prompter.integer(Field::Reps)?;
            prompter.finish_line();
            Workout::strength(name, duration, intensity, sets, reps)
        }
        None => match policy {
            UnknownWorkoutPolicy::Skip => {
                tracing::warn!("Unknown workout type {:?}, no workout recorded", kind);
                return Ok(None);
            }
            UnknownWorkoutPolicy::Reject => return Err(Error::UnknownWorkoutKind(kind)),
        },
    };

    Ok(Some(workout))
}

fn collect_diet<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<Diet> {
    let meal_type = prompter.text(Field::MealType)?;
    let calories = prompter.integer(Field::Calories)?;
    prompter.finish_line();
    let count = prompter.count(Field::NutrientCount)?;
    prompter.finish_line();

    let mut nutrients = Vec::new();
    for i in 0..count {
        let name = prompter.text(Field::NutrientName(i))?;
        let amount = prompter.real(Field::NutrientAmount(i))?;
        prompter.finish_line();
        nutrients.push((name, amount));
    }

    Ok(Diet::new(meal_type, calories, nutrients))
}
