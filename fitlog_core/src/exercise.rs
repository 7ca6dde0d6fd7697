//! Exercise records and the calorie estimate.
//!
//! An [`Exercise`] is one logged session. Cardio and strength sessions share
//! the same fields and the same MET formula; the [`ExerciseKind`] tag only
//! labels the category today, but every variant-specific decision branches on
//! it so the two can diverge later.

use chrono::{DateTime, Utc};
use std::fmt;

/// Format used for the `Date:` line of an exercise block
pub const DATE_FORMAT: &str = "%a %b %d %H:%M:%S UTC %Y";

/// Category of a logged exercise
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExerciseKind {
    Cardio,
    Strength,
}

impl ExerciseKind {
    /// Map a menu selector to a kind (1 = Cardio, 2 = Strength)
    pub fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            1 => Some(ExerciseKind::Cardio),
            2 => Some(ExerciseKind::Strength),
            _ => None,
        }
    }

    /// The menu selector for this kind
    pub fn selector(self) -> i64 {
        match self {
            ExerciseKind::Cardio => 1,
            ExerciseKind::Strength => 2,
        }
    }

    /// Display label ("Cardio" or "Strength")
    pub fn label(self) -> &'static str {
        match self {
            ExerciseKind::Cardio => "Cardio",
            ExerciseKind::Strength => "Strength",
        }
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single logged exercise session
///
/// Everything except `calories_burned` is fixed at construction.
/// `calories_burned` stays at 0.0 until
/// [`calculate_calories_burned`](Exercise::calculate_calories_burned) runs.
#[derive(Clone, Debug, PartialEq)]
pub struct Exercise {
    kind: ExerciseKind,
    name: String,
    duration_minutes: u32,
    date: DateTime<Utc>,
    calories_burned: f64,
}

impl Exercise {
    /// Create an uncalculated exercise of the given kind
    pub fn new(
        kind: ExerciseKind,
        name: impl Into<String>,
        duration_minutes: u32,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            duration_minutes,
            date,
            calories_burned: 0.0,
        }
    }

    /// Shorthand for a cardio exercise
    pub fn cardio(name: impl Into<String>, duration_minutes: u32, date: DateTime<Utc>) -> Self {
        Self::new(ExerciseKind::Cardio, name, duration_minutes, date)
    }

    /// Shorthand for a strength exercise
    pub fn strength(name: impl Into<String>, duration_minutes: u32, date: DateTime<Utc>) -> Self {
        Self::new(ExerciseKind::Strength, name, duration_minutes, date)
    }

    pub fn kind(&self) -> ExerciseKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn calories_burned(&self) -> f64 {
        self.calories_burned
    }

    /// Estimate calories as `met * weight * duration_minutes / 60`
    ///
    /// Calling this again replaces the previous estimate; values never
    /// accumulate. Inputs are not validated, so a non-positive weight or MET
    /// yields a meaningless (but finite) estimate instead of an error.
    pub fn calculate_calories_burned(&mut self, weight: f64, met: f64) {
        self.calories_burned = match self.kind {
            ExerciseKind::Cardio | ExerciseKind::Strength => {
                met_calories(met, weight, self.duration_minutes)
            }
        };
        tracing::debug!(
            "{} '{}': {:.2} kcal (met={}, weight={})",
            self.kind,
            self.name,
            self.calories_burned,
            met,
            weight
        );
    }

    /// Render the fixed multi-line description of this exercise
    pub fn display_details(&self) -> String {
        format!(
            "Exercise Type: {}\nName: {}\nDuration: {} minutes\nCalories Burned: {:.2} kcal\nDate: {}\n",
            self.kind,
            self.name,
            self.duration_minutes,
            self.calories_burned,
            self.date.format(DATE_FORMAT)
        )
    }
}

fn met_calories(met: f64, weight: f64, duration_minutes: u32) -> f64 {
    (met * weight * f64::from(duration_minutes)) / 60.0
}
