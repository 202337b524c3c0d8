use chrono::NaiveDate;

use crate::errors::PlanError;

use super::training_plan::PlanId;

pub const MIN_RUNNING_DAYS: u8 = 3;
pub const MAX_RUNNING_DAYS: u8 = 7;

pub const MIN_PLAN_WEEKS: u32 = 1;
pub const MAX_PLAN_WEEKS: u32 = 104;

/// Weekly running-day count must be within 3..=7
pub fn validate_running_days(days: u8) -> Result<(), PlanError> {
    if !(MIN_RUNNING_DAYS..=MAX_RUNNING_DAYS).contains(&days) {
        return Err(PlanError::InvalidRunningDays(days));
    }
    Ok(())
}

/// Catalog durations must span at least one week and at most two years
pub fn validate_plan_duration(plan: PlanId, weeks: u32) -> Result<(), PlanError> {
    if !(MIN_PLAN_WEEKS..=MAX_PLAN_WEEKS).contains(&weeks) {
        return Err(PlanError::InvalidPlanDuration { plan, weeks });
    }
    Ok(())
}

/// Race date may not precede the plan start date
pub fn validate_race_window(start_date: NaiveDate, race_date: NaiveDate) -> Result<(), PlanError> {
    if race_date < start_date {
        return Err(PlanError::RaceBeforeStart {
            race_date,
            start_date,
        });
    }
    Ok(())
}
