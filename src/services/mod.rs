// Plan generation services

pub mod plan_expansion_service;
pub mod week_shape_service;
pub mod workout_description_service;

pub use plan_expansion_service::PlanExpansionService;
pub use week_shape_service::WeekShapeService;
pub use workout_description_service::{DayContext, WorkoutDescriptionService};
