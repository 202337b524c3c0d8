// Training plan generator for the running coach.
// Pure computation: profile in, dated workouts out. No I/O.

pub mod config;
pub mod errors;
pub mod models;
pub mod services;

pub use errors::PlanError;
pub use services::{PlanExpansionService, WeekShapeService, WorkoutDescriptionService};
