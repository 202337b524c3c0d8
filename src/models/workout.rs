use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    Rest,
    EasyRun,
    Interval,
    Tempo,
    LongRun,
}

impl WorkoutType {
    pub fn is_run(&self) -> bool {
        !matches!(self, WorkoutType::Rest)
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::Rest => "Rest Day",
            WorkoutType::EasyRun => "Easy Run",
            WorkoutType::Interval => "Intervals",
            WorkoutType::Tempo => "Tempo Run",
            WorkoutType::LongRun => "Long Run",
        }
    }
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Workout types for one week, indexed by weekday (0 = Sunday .. 6 = Saturday)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekShape(pub [WorkoutType; 7]);

impl WeekShape {
    pub fn rest_week() -> Self {
        Self([WorkoutType::Rest; 7])
    }

    pub fn get(&self, weekday: Weekday) -> WorkoutType {
        self.0[weekday.num_days_from_sunday() as usize]
    }

    pub fn set(&mut self, weekday: Weekday, workout_type: WorkoutType) {
        self.0[weekday.num_days_from_sunday() as usize] = workout_type;
    }

    pub fn slots(&self) -> &[WorkoutType; 7] {
        &self.0
    }

    pub fn run_count(&self) -> usize {
        self.0.iter().filter(|t| t.is_run()).count()
    }
}

/// Numeric part of a day's workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkoutPrescription {
    Minutes { minutes: u32 },
    Repeats { reps: u32, distance_meters: u32 },
    Rest,
    Race,
}

impl WorkoutPrescription {
    /// Minutes of running, when the workout is prescribed by time
    pub fn minutes(&self) -> Option<u32> {
        match self {
            WorkoutPrescription::Minutes { minutes } => Some(*minutes),
            _ => None,
        }
    }

    pub fn reps(&self) -> Option<u32> {
        match self {
            WorkoutPrescription::Repeats { reps, .. } => Some(*reps),
            _ => None,
        }
    }
}

/// One calendar day of an expanded plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedWorkout {
    pub date: NaiveDate,
    pub workout_type: WorkoutType,
    pub prescription: WorkoutPrescription,
    pub description: String,
    pub day_of_plan: u32,
    pub week_of_plan: u32,
    pub is_rest_day: bool,
    pub is_race_day: bool,
    pub is_taper: bool,
}

/// A week of an expanded plan, for calendar and list views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanWeek {
    pub week_number: u32,
    pub workouts: Vec<DatedWorkout>,
    pub run_days: u32,
    pub total_minutes: u32,
}

impl PlanWeek {
    pub fn new(week_number: u32, workouts: Vec<DatedWorkout>) -> Self {
        let run_days = workouts.iter().filter(|w| !w.is_rest_day).count() as u32;
        let total_minutes = workouts
            .iter()
            .filter_map(|w| w.prescription.minutes())
            .sum();

        Self {
            week_number,
            workouts,
            run_days,
            total_minutes,
        }
    }

    /// Split a day-ordered plan into weeks by `week_of_plan`
    pub fn group(workouts: Vec<DatedWorkout>) -> Vec<PlanWeek> {
        let mut weeks: Vec<PlanWeek> = Vec::new();
        let mut current: Vec<DatedWorkout> = Vec::new();

        for workout in workouts {
            if let Some(last) = current.last() {
                if last.week_of_plan != workout.week_of_plan {
                    let week_number = last.week_of_plan;
                    weeks.push(PlanWeek::new(week_number, std::mem::take(&mut current)));
                }
            }
            current.push(workout);
        }

        if let Some(last) = current.last() {
            let week_number = last.week_of_plan;
            weeks.push(PlanWeek::new(week_number, current));
        }

        weeks
    }
}

/// Where a profile's plan stands relative to a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PlanStatus {
    NotStarted { starts_on: NaiveDate },
    InProgress { day_of_plan: u32, week_of_plan: u32 },
    EndingSoon { days_remaining: i64 },
    Ended { ended_on: NaiveDate },
}

impl std::fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanStatus::NotStarted { starts_on } => write!(f, "starts on {}", starts_on),
            PlanStatus::InProgress {
                day_of_plan,
                week_of_plan,
            } => write!(f, "in progress (week {}, day {})", week_of_plan, day_of_plan),
            PlanStatus::EndingSoon { days_remaining } => {
                write!(f, "ending soon ({} days remaining)", days_remaining)
            }
            PlanStatus::Ended { ended_on } => write!(f, "ended on {}", ended_on),
        }
    }
}
