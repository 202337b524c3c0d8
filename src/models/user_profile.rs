use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::PlanError;
use super::validation::{validate_race_window, validate_running_days};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunningLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for RunningLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunningLevel::Beginner => write!(f, "beginner"),
            RunningLevel::Intermediate => write!(f, "intermediate"),
            RunningLevel::Advanced => write!(f, "advanced"),
        }
    }
}

impl std::str::FromStr for RunningLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(RunningLevel::Beginner),
            "intermediate" => Ok(RunningLevel::Intermediate),
            "advanced" => Ok(RunningLevel::Advanced),
            _ => Err(format!("Unknown running level: {}", s)),
        }
    }
}

/// Weekday reserved for the long run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LongRunDay {
    #[default]
    Saturday,
    Sunday,
}

impl LongRunDay {
    pub fn weekday(&self) -> Weekday {
        match self {
            LongRunDay::Saturday => Weekday::Sat,
            LongRunDay::Sunday => Weekday::Sun,
        }
    }
}

impl std::fmt::Display for LongRunDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LongRunDay::Saturday => write!(f, "saturday"),
            LongRunDay::Sunday => write!(f, "sunday"),
        }
    }
}

impl std::str::FromStr for LongRunDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "saturday" | "sat" => Ok(LongRunDay::Saturday),
            "sunday" | "sun" => Ok(LongRunDay::Sunday),
            _ => Err(format!("Long run day must be saturday or sunday, got {}", s)),
        }
    }
}

/// The slice of the user's profile the plan generator reads.
///
/// Required fields are optional here because profiles arrive half-filled
/// from onboarding; the services turn gaps into placeholder text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub running_level: Option<RunningLevel>,

    #[serde(default)]
    pub training_plan: Option<String>,

    #[serde(default)]
    pub plan_start_date: Option<NaiveDate>,

    #[serde(default)]
    pub race_date: Option<NaiveDate>,

    #[serde(default = "default_running_days")]
    pub running_days_per_week: u8,

    #[serde(default)]
    pub long_run_day: LongRunDay,
}

fn default_running_days() -> u8 {
    3
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            running_level: None,
            training_plan: None,
            plan_start_date: None,
            race_date: None,
            running_days_per_week: default_running_days(),
            long_run_day: LongRunDay::default(),
        }
    }
}

impl UserProfile {
    /// Parse a profile document as stored by the app
    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the profile, reporting the first problem found
    pub fn validate(&self) -> Result<(), PlanError> {
        self.required_fields()?;
        validate_running_days(self.running_days_per_week)?;
        if let (Some(start), Some(race)) = (self.plan_start_date, self.race_date) {
            validate_race_window(start, race)?;
        }
        Ok(())
    }

    /// The fields without which no plan can be built, in the order they are checked
    pub fn required_fields(&self) -> Result<(&str, RunningLevel, NaiveDate), PlanError> {
        let plan = self
            .training_plan
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .ok_or(PlanError::MissingField("training_plan"))?;
        let level = self
            .running_level
            .ok_or(PlanError::MissingField("running_level"))?;
        let start = self
            .plan_start_date
            .ok_or(PlanError::MissingField("plan_start_date"))?;
        Ok((plan, level, start))
    }
}
