// Plan generator data models

pub mod training_plan;
pub mod user_profile;
pub mod validation;
pub mod workout;

pub use training_plan::*;
pub use user_profile::*;
pub use validation::*;
pub use workout::*;
