//! Error types for the fitness_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fitness_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-numeric text where a number was requested
    #[error("Invalid number for {field}: {input:?}")]
    InvalidNumber { field: String, input: String },

    /// Input ended before a required answer was read
    #[error("Unexpected end of input while reading {field}")]
    UnexpectedEof { field: String },

    /// Goal cannot produce a progress percentage
    #[error("Invalid goal: {0}")]
    InvalidGoal(String),

    /// Workout kind other than cardio/strength under the reject policy
    #[error("Unknown workout type: {0:?} (expected Cardio or Strength)")]
    UnknownWorkoutKind(String),
}
