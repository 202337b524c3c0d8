use crate::models::{
    PlanFamily, RunningLevel, TrainingPlanCatalogEntry, WorkoutPrescription, WorkoutType,
};

const INTERVAL_DISTANCE_METERS: u32 = 400;

/// Everything needed to prescribe and describe one day of a plan
#[derive(Debug, Clone, Copy)]
pub struct DayContext<'a> {
    pub workout_type: WorkoutType,
    pub running_level: RunningLevel,
    pub plan: &'a TrainingPlanCatalogEntry,
    pub week_of_plan: u32,
    pub day_of_plan: u32,
    pub is_race_day: bool,
    /// None when the profile has no race date
    pub days_until_race: Option<i64>,
}

/// Reduction applied to a workout while tapering
#[derive(Debug, Clone, Copy)]
struct Taper {
    percent: u32,
    floor: u32,
}

impl Taper {
    fn apply(&self, value: u32) -> u32 {
        (value * self.percent / 100).max(self.floor)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WorkoutDescriptionService;

impl WorkoutDescriptionService {
    pub fn new() -> Self {
        Self
    }

    /// Taper applies in the final two weeks of 12+ week plans and the final
    /// week of 8+ week plans. Never without a race date.
    pub fn is_tapering(&self, duration_weeks: u32, days_until_race: Option<i64>) -> bool {
        match days_until_race {
            Some(days) => {
                (duration_weeks >= 12 && days <= 14) || (duration_weeks >= 8 && days <= 7)
            }
            None => false,
        }
    }

    /// Numeric workout for the day: minutes or interval repeats
    pub fn prescribe(&self, ctx: &DayContext<'_>) -> WorkoutPrescription {
        if ctx.is_race_day {
            return WorkoutPrescription::Race;
        }

        let tapering = self.is_tapering(ctx.plan.duration_weeks, ctx.days_until_race);
        let level = ctx.running_level;

        match ctx.workout_type {
            WorkoutType::LongRun => {
                let (base, increment) = match level {
                    RunningLevel::Beginner => (30, 5),
                    RunningLevel::Intermediate => (45, 7),
                    RunningLevel::Advanced => (60, 10),
                };
                let ceiling = long_run_ceiling(ctx.plan.id.family());
                let minutes = (base + increment * ctx.week_of_plan).min(ceiling);
                let minutes = if tapering {
                    Taper { percent: 50, floor: 30 }.apply(minutes)
                } else {
                    minutes
                };
                WorkoutPrescription::Minutes { minutes }
            }
            WorkoutType::Interval => {
                let reps = match level {
                    RunningLevel::Beginner => 4,
                    RunningLevel::Intermediate => 6,
                    RunningLevel::Advanced => 8,
                };
                let reps = if tapering {
                    Taper { percent: 60, floor: 2 }.apply(reps)
                } else {
                    reps
                };
                WorkoutPrescription::Repeats {
                    reps,
                    distance_meters: INTERVAL_DISTANCE_METERS,
                }
            }
            WorkoutType::Tempo => {
                let minutes = match level {
                    RunningLevel::Beginner => 15,
                    RunningLevel::Intermediate => 20,
                    RunningLevel::Advanced => 30,
                };
                let minutes = if tapering {
                    Taper { percent: 60, floor: 10 }.apply(minutes)
                } else {
                    minutes
                };
                WorkoutPrescription::Minutes { minutes }
            }
            WorkoutType::EasyRun => {
                let minutes = match level {
                    RunningLevel::Beginner => 20,
                    RunningLevel::Intermediate => 30,
                    RunningLevel::Advanced => 40,
                };
                let minutes = match (tapering, ctx.days_until_race) {
                    (true, Some(days)) if days <= 3 => Taper { percent: 50, floor: 15 }.apply(minutes),
                    (true, _) => Taper { percent: 70, floor: 20 }.apply(minutes),
                    (false, _) => minutes,
                };
                WorkoutPrescription::Minutes { minutes }
            }
            WorkoutType::Rest => WorkoutPrescription::Rest,
        }
    }

    /// Human-readable workout text for the day
    pub fn describe(&self, ctx: &DayContext<'_>) -> String {
        if ctx.is_race_day {
            return format!(
                "RACE DAY! Today is the day you've trained for. Good luck in your {}, \
                 trust your training and enjoy every step!",
                ctx.plan.label
            );
        }

        let body = match self.prescribe(ctx) {
            WorkoutPrescription::Minutes { minutes } => match ctx.workout_type {
                WorkoutType::LongRun => format!(
                    "Long Run - {} minutes at an easy, conversational pace. Focus on time on your feet.",
                    minutes
                ),
                WorkoutType::Tempo => format!(
                    "Tempo Run - {} minutes at a comfortably hard pace, with 10 minutes easy before and after.",
                    minutes
                ),
                _ => format!(
                    "Easy Run - {} minutes at a relaxed, conversational pace.",
                    minutes
                ),
            },
            WorkoutPrescription::Repeats {
                reps,
                distance_meters,
            } => format!(
                "Intervals - {} x {}m at a hard effort with 90 seconds of easy jogging between repeats. \
                 Warm up and cool down with 10 minutes of easy running.",
                reps, distance_meters
            ),
            WorkoutPrescription::Rest | WorkoutPrescription::Race => {
                "Rest Day - Recover with rest, light stretching, or gentle cross-training.".to_string()
            }
        };

        let mut text = format!(
            "Week {}, Day {} of your {}: {}",
            ctx.week_of_plan, ctx.day_of_plan, ctx.plan.label, body
        );

        if ctx.workout_type.is_run() && self.is_tapering(ctx.plan.duration_weeks, ctx.days_until_race) {
            text.push_str(" Taper: volume is reduced this close to race day so you arrive fresh.");
        }

        text
    }
}

fn long_run_ceiling(family: PlanFamily) -> u32 {
    match family {
        PlanFamily::Ultra => 240,
        PlanFamily::Marathon => 180,
        PlanFamily::Half => 120,
        PlanFamily::Other => 90,
    }
}
