//! User profile and exercise history.
//!
//! The profile is created once at startup and owns every logged exercise.
//! History is append-only: there is no edit, delete or reorder operation.

use crate::config::ProfileConfig;
use crate::Exercise;

/// Shown instead of the history when nothing has been logged
pub const NO_EXERCISES_NOTICE: &str = "No exercises logged yet.";

/// Heading printed above a non-empty history
pub const HISTORY_HEADER: &str = "=== Exercise History ===";

/// Line printed after each exercise block
pub const HISTORY_DELIMITER: &str = "-------------------------";

/// A single user with a fixed body profile and their logged exercises
#[derive(Clone, Debug)]
pub struct UserProfile {
    name: String,
    age: u32,
    weight: f64,
    exercise_history: Vec<Exercise>,
}

impl UserProfile {
    /// Create a profile with an empty history
    pub fn new(name: impl Into<String>, age: u32, weight: f64) -> Self {
        Self {
            name: name.into(),
            age,
            weight,
            exercise_history: Vec::new(),
        }
    }

    /// Create a profile from the `[profile]` configuration section
    pub fn from_config(config: &ProfileConfig) -> Self {
        Self::new(config.name.clone(), config.age, config.weight)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Body weight used for calorie estimates
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Logged exercises, oldest first
    pub fn exercise_history(&self) -> &[Exercise] {
        &self.exercise_history
    }

    pub fn len(&self) -> usize {
        self.exercise_history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercise_history.is_empty()
    }

    /// Append an exercise to the end of the history
    ///
    /// No deduplication or validation happens here; an exercise whose
    /// calories were never calculated is stored as-is.
    pub fn add_exercise(&mut self, exercise: Exercise) {
        tracing::info!(
            "Logged {} exercise '{}' ({} min, {:.2} kcal)",
            exercise.kind(),
            exercise.name(),
            exercise.duration_minutes(),
            exercise.calories_burned()
        );
        self.exercise_history.push(exercise);
    }

    /// Render the history in logging order
    ///
    /// An empty history renders as [`NO_EXERCISES_NOTICE`] alone. Otherwise
    /// the output is [`HISTORY_HEADER`] followed by each exercise's details,
    /// each block closed by [`HISTORY_DELIMITER`].
    pub fn display_exercise_history(&self) -> String {
        if self.exercise_history.is_empty() {
            return format!("{}\n", NO_EXERCISES_NOTICE);
        }

        let mut out = format!("\n{}\n", HISTORY_HEADER);
        for exercise in &self.exercise_history {
            out.push_str(&exercise.display_details());
            out.push_str(HISTORY_DELIMITER);
            out.push('\n');
        }
        out
    }
}
