#![forbid(unsafe_code)]

//! Core domain model for the Fitlog exercise tracker.
//!
//! This crate provides:
//! - Exercise records and the MET-based calorie estimate
//! - The exercise factory (type selector to variant)
//! - The user profile and its append-only exercise history
//! - Configuration and logging setup shared by the binaries

pub mod error;
pub mod exercise;
pub mod factory;
pub mod profile;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use exercise::{Exercise, ExerciseKind};
pub use factory::create_exercise;
pub use profile::UserProfile;
pub use config::Config;
