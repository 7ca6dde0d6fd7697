//! Exercise factory.
//!
//! Turns the raw values collected by the console shell into an [`Exercise`]
//! of the requested kind.

use crate::{Exercise, ExerciseKind};
use chrono::{DateTime, Utc};

/// Build an exercise from a type selector (1 = Cardio, 2 = Strength)
///
/// Returns `None` when the selector is not recognized; callers treat that as
/// "exercise not added". The name and duration are taken as-is: an empty name
/// is accepted, and duration checks belong to the caller.
pub fn create_exercise(
    type_selector: i64,
    name: impl Into<String>,
    duration_minutes: u32,
    date: DateTime<Utc>,
) -> Option<Exercise> {
    let Some(kind) = ExerciseKind::from_selector(type_selector) else {
        tracing::debug!("Rejected unknown exercise type selector {}", type_selector);
        return None;
    };

    Some(Exercise::new(kind, name, duration_minutes, date))
}
