use chrono::NaiveDate;
use thiserror::Error;

use crate::models::PlanId;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Missing required profile field: {0}")]
    MissingField(&'static str),
    #[error("Unknown training plan: {0}")]
    UnknownPlan(String),
    #[error("Race date {race_date} is before plan start date {start_date}")]
    RaceBeforeStart {
        race_date: NaiveDate,
        start_date: NaiveDate,
    },
    #[error("Plan {plan} has an unusable duration of {weeks} weeks")]
    InvalidPlanDuration { plan: PlanId, weeks: u32 },
    #[error("Running days per week must be between 3 and 7, got {0}")]
    InvalidRunningDays(u8),
    #[error("Invalid profile document: {0}")]
    InvalidProfile(#[from] serde_json::Error),
}

impl PlanError {
    /// Text safe to show in place of a workout when the plan can't be built.
    pub fn placeholder(&self) -> String {
        match self {
            PlanError::MissingField("training_plan") => {
                "Select a training plan in your profile to see your workouts.".to_string()
            }
            PlanError::MissingField("running_level") => {
                "Set your running level in your profile to see your workouts.".to_string()
            }
            PlanError::MissingField("plan_start_date") => {
                "Set a plan start date in your profile to see your workouts.".to_string()
            }
            PlanError::MissingField(field) => {
                format!("Complete your profile ({}) to see your workouts.", field)
            }
            PlanError::UnknownPlan(_) => "Training plan details not found.".to_string(),
            PlanError::RaceBeforeStart { .. } => {
                "Your race date is before your plan start date. Please update your profile."
                    .to_string()
            }
            PlanError::InvalidPlanDuration { .. } => {
                "This training plan is misconfigured. Check the plan catalog in your settings."
                    .to_string()
            }
            PlanError::InvalidRunningDays(_) => {
                "Choose between 3 and 7 running days per week in your profile.".to_string()
            }
            PlanError::InvalidProfile(_) => "Your profile could not be read.".to_string(),
        }
    }
}
