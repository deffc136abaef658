#![forbid(unsafe_code)]

//! Core domain model and console flow for the fitness journal.
//!
//! This crate provides:
//! - Domain types (goals, workouts, meals, users)
//! - Progress report rendering (text and JSON)
//! - Typed console prompts and the interactive session
//! - Configuration and logging

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod user;
pub mod report;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::{Config, NutrientOrder, ReportConfig, UnknownWorkoutPolicy, WorkoutConfig};
pub use user::User;
pub use report::{render_json, render_progress};
pub use prompt::{Field, Prompter};
pub use session::collect_user;
