use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::errors::PlanError;
use crate::models::{
    validate_plan_duration, validate_race_window, DatedWorkout, PlanCatalog, PlanStatus, PlanWeek,
    RunningLevel, TrainingPlanCatalogEntry, UserProfile, WeekShape, WorkoutType,
};

use super::week_shape_service::WeekShapeService;
use super::workout_description_service::{DayContext, WorkoutDescriptionService};

/// Days before the plan end at which it counts as "ending soon"
pub const ENDING_SOON_DAYS: i64 = 7;

/// Turns a user profile into a dated calendar of workouts.
///
/// Holds only the read-only plan catalog, so one instance can serve any
/// number of callers. Nothing here reads the clock except the `todays_*`,
/// `is_*` and status helpers without an explicit date.
#[derive(Debug, Clone)]
pub struct PlanExpansionService {
    catalog: PlanCatalog,
    week_shapes: WeekShapeService,
    descriptions: WorkoutDescriptionService,
}

/// A profile with every required field present and its plan resolved
#[derive(Debug, Clone, Copy)]
struct ResolvedPlan<'a> {
    plan: &'a TrainingPlanCatalogEntry,
    running_level: RunningLevel,
    start_date: NaiveDate,
    end_date: NaiveDate,
    race_date: Option<NaiveDate>,
    shape: WeekShape,
}

impl Default for PlanExpansionService {
    fn default() -> Self {
        Self::new(PlanCatalog::default())
    }
}

impl PlanExpansionService {
    pub fn new(catalog: PlanCatalog) -> Self {
        Self {
            catalog,
            week_shapes: WeekShapeService::new(),
            descriptions: WorkoutDescriptionService::new(),
        }
    }

    pub fn catalog(&self) -> &PlanCatalog {
        &self.catalog
    }

    fn resolve(&self, profile: &UserProfile) -> Result<ResolvedPlan<'_>, PlanError> {
        let (plan_id, running_level, start_date) = profile.required_fields()?;
        let plan = self.catalog.lookup(plan_id)?;

        validate_plan_duration(plan.id, plan.duration_weeks)?;

        let end_date = match profile.race_date {
            Some(race_date) => {
                validate_race_window(start_date, race_date)?;
                race_date
            }
            None => start_date
                .checked_add_signed(Duration::days(plan.duration_days() - 1))
                .ok_or(PlanError::InvalidPlanDuration {
                    plan: plan.id,
                    weeks: plan.duration_weeks,
                })?,
        };

        // The shape depends only on the profile, so every week shares it
        let shape = self
            .week_shapes
            .assign_week(profile.running_days_per_week, profile.long_run_day);

        Ok(ResolvedPlan {
            plan,
            running_level,
            start_date,
            end_date,
            race_date: profile.race_date,
            shape,
        })
    }

    fn build_day(&self, resolved: &ResolvedPlan<'_>, date: NaiveDate) -> DatedWorkout {
        let day_of_plan = (date - resolved.start_date).num_days() as u32 + 1;
        let week_of_plan = (day_of_plan - 1) / 7 + 1;
        let is_race_day = resolved.race_date == Some(date);
        let days_until_race = resolved.race_date.map(|race| (race - date).num_days());
        let workout_type = resolved.shape.get(date.weekday());

        let ctx = DayContext {
            workout_type,
            running_level: resolved.running_level,
            plan: resolved.plan,
            week_of_plan,
            day_of_plan,
            is_race_day,
            days_until_race,
        };

        DatedWorkout {
            date,
            workout_type,
            prescription: self.descriptions.prescribe(&ctx),
            description: self.descriptions.describe(&ctx),
            day_of_plan,
            week_of_plan,
            is_rest_day: workout_type == WorkoutType::Rest && !is_race_day,
            is_race_day,
            is_taper: !is_race_day
                && self
                    .descriptions
                    .is_tapering(resolved.plan.duration_weeks, days_until_race),
        }
    }

    /// Last day of the plan: the race date, or the end of the nominal duration
    pub fn plan_end_date(&self, profile: &UserProfile) -> Result<NaiveDate, PlanError> {
        Ok(self.resolve(profile)?.end_date)
    }

    /// Expand the profile into one workout per day, start to end inclusive
    pub fn generate(&self, profile: &UserProfile) -> Result<Vec<DatedWorkout>, PlanError> {
        let resolved = self.resolve(profile)?;

        let workouts: Vec<DatedWorkout> = resolved
            .start_date
            .iter_days()
            .take_while(|date| *date <= resolved.end_date)
            .map(|date| self.build_day(&resolved, date))
            .collect();

        tracing::debug!(
            plan = %resolved.plan.id,
            start = %resolved.start_date,
            end = %resolved.end_date,
            days = workouts.len(),
            "Expanded training plan"
        );

        Ok(workouts)
    }

    /// Like [`generate`](Self::generate), but an unusable profile yields an
    /// empty plan instead of an error.
    pub fn expand(&self, profile: &UserProfile) -> Vec<DatedWorkout> {
        match self.generate(profile) {
            Ok(workouts) => workouts,
            Err(e) => {
                tracing::warn!(error = %e, "Could not expand training plan, returning empty plan");
                Vec::new()
            }
        }
    }

    /// The expanded plan grouped into weeks
    pub fn weeks(&self, profile: &UserProfile) -> Vec<PlanWeek> {
        PlanWeek::group(self.expand(profile))
    }

    /// The workout for a single date, if the date falls within the plan
    pub fn workout_on(&self, profile: &UserProfile, date: NaiveDate) -> Option<DatedWorkout> {
        let resolved = self.resolve(profile).ok()?;
        if date < resolved.start_date || date > resolved.end_date {
            return None;
        }
        Some(self.build_day(&resolved, date))
    }

    pub fn todays_workout(&self, profile: &UserProfile) -> String {
        self.todays_workout_on(profile, today())
    }

    /// Workout text for `today`, or a message explaining why there is none
    pub fn todays_workout_on(&self, profile: &UserProfile, today: NaiveDate) -> String {
        let resolved = match self.resolve(profile) {
            Ok(resolved) => resolved,
            Err(e) => {
                tracing::debug!(error = %e, "No workout available for today");
                return e.placeholder();
            }
        };

        if today < resolved.start_date {
            return format!(
                "Your {} plan starts on {}. Get ready!",
                resolved.plan.label,
                resolved.start_date.format("%A, %B %-d, %Y")
            );
        }

        if today > resolved.end_date {
            return format!(
                "Your {} plan has concluded. Congratulations on finishing your training!",
                resolved.plan.label
            );
        }

        self.build_day(&resolved, today).description
    }

    pub fn is_ending_soon(&self, profile: &UserProfile) -> bool {
        self.is_ending_soon_on(profile, today())
    }

    /// True when the plan ends within the next week, today included
    pub fn is_ending_soon_on(&self, profile: &UserProfile, today: NaiveDate) -> bool {
        match self.plan_end_date(profile) {
            Ok(end) => (0..=ENDING_SOON_DAYS).contains(&(end - today).num_days()),
            Err(_) => false,
        }
    }

    pub fn is_ended(&self, profile: &UserProfile) -> bool {
        self.is_ended_on(profile, today())
    }

    pub fn is_ended_on(&self, profile: &UserProfile, today: NaiveDate) -> bool {
        match self.plan_end_date(profile) {
            Ok(end) => today > end,
            Err(_) => false,
        }
    }

    /// Where the plan stands on `today`
    pub fn plan_status_on(
        &self,
        profile: &UserProfile,
        today: NaiveDate,
    ) -> Result<PlanStatus, PlanError> {
        let resolved = self.resolve(profile)?;

        if today < resolved.start_date {
            return Ok(PlanStatus::NotStarted {
                starts_on: resolved.start_date,
            });
        }
        if today > resolved.end_date {
            return Ok(PlanStatus::Ended {
                ended_on: resolved.end_date,
            });
        }

        let days_remaining = (resolved.end_date - today).num_days();
        if days_remaining <= ENDING_SOON_DAYS {
            return Ok(PlanStatus::EndingSoon { days_remaining });
        }

        let day_of_plan = (today - resolved.start_date).num_days() as u32 + 1;
        Ok(PlanStatus::InProgress {
            day_of_plan,
            week_of_plan: (day_of_plan - 1) / 7 + 1,
        })
    }

    /// Days from `today` until the race, when a race date is set
    pub fn days_until_race_on(&self, profile: &UserProfile, today: NaiveDate) -> Option<i64> {
        profile.race_date.map(|race| (race - today).num_days())
    }
}

/// Local calendar day
fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LongRunDay, PlanId, WorkoutPrescription};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn five_k_profile() -> UserProfile {
        UserProfile {
            running_level: Some(RunningLevel::Beginner),
            training_plan: Some("5k".to_string()),
            plan_start_date: Some(date(2024, 1, 1)),
            race_date: None,
            running_days_per_week: 3,
            long_run_day: LongRunDay::Saturday,
        }
    }

    #[test]
    fn test_end_date_from_catalog_duration() {
        let service = PlanExpansionService::default();
        assert_eq!(service.plan_end_date(&five_k_profile()).unwrap(), date(2024, 2, 25));
    }

    #[test]
    fn test_end_date_from_race_date() {
        let service = PlanExpansionService::default();
        let profile = UserProfile {
            race_date: Some(date(2024, 3, 10)),
            ..five_k_profile()
        };
        assert_eq!(service.plan_end_date(&profile).unwrap(), date(2024, 3, 10));
        assert_eq!(service.expand(&profile).len(), 70);
    }

    #[test]
    fn test_week_numbers_roll_over_every_seven_days() {
        let service = PlanExpansionService::default();
        let plan = service.expand(&five_k_profile());

        assert_eq!(plan[6].week_of_plan, 1);
        assert_eq!(plan[7].week_of_plan, 2);
        assert_eq!(plan[7].day_of_plan, 8);
        assert_eq!(plan.last().unwrap().week_of_plan, 8);
    }

    #[test]
    fn test_long_run_grows_each_week() {
        let service = PlanExpansionService::default();
        let long_runs: Vec<u32> = service
            .expand(&five_k_profile())
            .iter()
            .filter(|w| w.workout_type == WorkoutType::LongRun)
            .filter_map(|w| w.prescription.minutes())
            .collect();

        assert_eq!(long_runs, vec![35, 40, 45, 50, 55, 60, 65, 70]);
    }

    #[test]
    fn test_unknown_plan_gives_empty_plan_and_placeholder() {
        let service = PlanExpansionService::default();
        let profile = UserProfile {
            training_plan: Some("triathlon".to_string()),
            ..five_k_profile()
        };

        assert!(service.expand(&profile).is_empty());
        assert!(service
            .todays_workout_on(&profile, date(2024, 1, 2))
            .contains("plan details not found"));
        assert!(!service.is_ended_on(&profile, date(2030, 1, 1)));
    }

    #[test]
    fn test_missing_fields_short_circuit() {
        let service = PlanExpansionService::default();
        let profile = UserProfile {
            plan_start_date: None,
            ..five_k_profile()
        };

        assert!(service.expand(&profile).is_empty());
        assert!(service.weeks(&profile).is_empty());
        assert!(service.todays_workout_on(&profile, date(2024, 1, 2)).contains("start date"));
        assert!(!service.is_ending_soon_on(&profile, date(2024, 1, 2)));
        assert!(service.plan_status_on(&profile, date(2024, 1, 2)).is_err());
    }

    fn five_k_lasting(weeks: u32) -> PlanExpansionService {
        PlanExpansionService::new(crate::config::catalog_with_overrides(&[
            TrainingPlanCatalogEntry::new(PlanId::FiveK, "5K", weeks),
        ]))
    }

    #[test]
    fn test_oversized_duration_fails_closed() {
        let service = five_k_lasting(u32::MAX);
        let profile = five_k_profile();
        let today = date(2024, 1, 1);

        assert_matches::assert_matches!(
            service.plan_end_date(&profile),
            Err(PlanError::InvalidPlanDuration { weeks: u32::MAX, .. })
        );
        assert!(service.expand(&profile).is_empty());
        assert!(service.weeks(&profile).is_empty());
        assert!(service.todays_workout_on(&profile, today).contains("misconfigured"));
        assert!(!service.is_ended_on(&profile, today));
        assert!(!service.is_ending_soon_on(&profile, today));
        assert!(service.plan_status_on(&profile, today).is_err());
    }

    #[test]
    fn test_zero_week_duration_is_not_a_finished_plan() {
        let service = five_k_lasting(0);
        let profile = five_k_profile();
        let today = date(2024, 1, 1);

        assert!(service.generate(&profile).is_err());
        assert!(service.expand(&profile).is_empty());
        assert!(!service.todays_workout_on(&profile, today).contains("concluded"));
        assert!(!service.is_ended_on(&profile, today));

        let with_race = UserProfile {
            race_date: Some(date(2024, 2, 1)),
            ..profile
        };
        assert!(service.generate(&with_race).is_err());
    }

    #[test]
    fn test_end_date_near_calendar_limit_fails_closed() {
        let service = PlanExpansionService::default();
        let profile = UserProfile {
            plan_start_date: Some(NaiveDate::MAX),
            ..five_k_profile()
        };

        assert!(service.plan_end_date(&profile).is_err());
        assert!(service.expand(&profile).is_empty());
    }

    #[test]
    fn test_todays_workout_before_during_after() {
        let service = PlanExpansionService::default();
        let profile = five_k_profile();

        let before = service.todays_workout_on(&profile, date(2023, 12, 20));
        assert_eq!(before, "Your 5K plan starts on Monday, January 1, 2024. Get ready!");

        let saturday = service.todays_workout_on(&profile, date(2024, 1, 6));
        assert!(saturday.starts_with("Week 1, Day 6 of your 5K: Long Run - 35 minutes"));

        let after = service.todays_workout_on(&profile, date(2024, 2, 26));
        assert!(after.contains("has concluded"));
    }

    #[test]
    fn test_ending_soon_and_ended() {
        let service = PlanExpansionService::default();
        let profile = five_k_profile();
        let end = date(2024, 2, 25);

        assert!(!service.is_ending_soon_on(&profile, end - Duration::days(8)));
        assert!(service.is_ending_soon_on(&profile, end - Duration::days(7)));
        assert!(service.is_ending_soon_on(&profile, end));
        assert!(!service.is_ending_soon_on(&profile, end + Duration::days(1)));

        assert!(!service.is_ended_on(&profile, end));
        assert!(service.is_ended_on(&profile, end + Duration::days(1)));
    }

    #[test]
    fn test_plan_status() {
        let service = PlanExpansionService::default();
        let profile = five_k_profile();

        assert_eq!(
            service.plan_status_on(&profile, date(2023, 12, 31)).unwrap(),
            PlanStatus::NotStarted { starts_on: date(2024, 1, 1) }
        );
        assert_eq!(
            service.plan_status_on(&profile, date(2024, 1, 10)).unwrap(),
            PlanStatus::InProgress { day_of_plan: 10, week_of_plan: 2 }
        );
        assert_eq!(
            service.plan_status_on(&profile, date(2024, 2, 20)).unwrap(),
            PlanStatus::EndingSoon { days_remaining: 5 }
        );
        assert_eq!(
            service.plan_status_on(&profile, date(2024, 3, 1)).unwrap(),
            PlanStatus::Ended { ended_on: date(2024, 2, 25) }
        );
    }

    #[test]
    fn test_workout_on_outside_plan() {
        let service = PlanExpansionService::default();
        let profile = five_k_profile();

        assert!(service.workout_on(&profile, date(2023, 12, 31)).is_none());
        assert!(service.workout_on(&profile, date(2024, 2, 26)).is_none());

        let tuesday = service.workout_on(&profile, date(2024, 1, 2)).unwrap();
        assert_eq!(tuesday.workout_type, WorkoutType::Interval);
        assert_eq!(
            tuesday.prescription,
            WorkoutPrescription::Repeats { reps: 4, distance_meters: 400 }
        );
    }

    #[test]
    fn test_weeks_grouping() {
        let service = PlanExpansionService::default();
        let weeks = service.weeks(&five_k_profile());

        assert_eq!(weeks.len(), 8);
        assert!(weeks.iter().all(|w| w.workouts.len() == 7 && w.run_days == 3));
        // 15 min tempo + 35 min long run
        assert_eq!(weeks[0].total_minutes, 50);
        assert_eq!(weeks[7].week_number, 8);
    }

    #[test]
    fn test_taper_flag_near_race() {
        let service = PlanExpansionService::default();
        let profile = UserProfile {
            training_plan: Some(PlanId::Marathon.to_string()),
            race_date: Some(date(2024, 4, 21)),
            ..five_k_profile()
        };

        let plan = service.expand(&profile);
        let race = plan.last().unwrap();
        assert!(race.is_race_day);
        assert!(!race.is_taper);
        assert!(!race.is_rest_day);

        let two_weeks_out = plan.iter().find(|w| w.date == date(2024, 4, 7)).unwrap();
        assert!(two_weeks_out.is_taper);
        let three_weeks_out = plan.iter().find(|w| w.date == date(2024, 3, 31)).unwrap();
        assert!(!three_weeks_out.is_taper);
    }

    #[test]
    fn test_days_until_race() {
        let service = PlanExpansionService::default();
        let profile = UserProfile {
            race_date: Some(date(2024, 2, 10)),
            ..five_k_profile()
        };

        assert_eq!(service.days_until_race_on(&profile, date(2024, 2, 1)), Some(9));
        assert_eq!(service.days_until_race_on(&five_k_profile(), date(2024, 2, 1)), None);
    }
}
