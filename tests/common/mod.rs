// Shared fixtures for the plan generator integration tests

use chrono::NaiveDate;
use run_coach::models::{LongRunDay, RunningLevel, UserProfile};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize test logging
#[allow(dead_code)]
pub fn init_test_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .init();
    });
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Profile builder for tests
pub struct ProfileFixture;

#[allow(dead_code)]
impl ProfileFixture {
    pub fn beginner_5k() -> UserProfile {
        UserProfile {
            running_level: Some(RunningLevel::Beginner),
            training_plan: Some("5k".to_string()),
            plan_start_date: Some(date(2024, 1, 1)),
            race_date: None,
            running_days_per_week: 3,
            long_run_day: LongRunDay::Saturday,
        }
    }

    pub fn marathon(level: RunningLevel, start: NaiveDate, race: Option<NaiveDate>) -> UserProfile {
        UserProfile {
            running_level: Some(level),
            training_plan: Some("marathon".to_string()),
            plan_start_date: Some(start),
            race_date: race,
            running_days_per_week: 5,
            long_run_day: LongRunDay::Sunday,
        }
    }
}
