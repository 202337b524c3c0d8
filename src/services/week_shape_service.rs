use chrono::Weekday;

use crate::models::{LongRunDay, WeekShape, WorkoutType};

/// Quality sessions placed after the long run, in order. Each places at most
/// one run, into the first candidate day that is still a rest day.
const QUALITY_RULES: [(WorkoutType, &[Weekday]); 2] = [
    (WorkoutType::Interval, &[Weekday::Tue, Weekday::Wed]),
    (WorkoutType::Tempo, &[Weekday::Thu, Weekday::Wed, Weekday::Fri]),
];

/// Order in which the remaining runs become easy runs
const EASY_RUN_PRIORITY: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Wed,
    Weekday::Fri,
    Weekday::Sun,
    Weekday::Tue,
    Weekday::Thu,
    Weekday::Sat,
];

const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

#[derive(Debug, Clone, Copy, Default)]
pub struct WeekShapeService;

impl WeekShapeService {
    pub fn new() -> Self {
        Self
    }

    /// Assign a workout type to each weekday for the given weekly run count.
    ///
    /// Counts above 7 are treated as 7. The long-run day always carries the
    /// long run when at least one run is requested.
    pub fn assign_week(&self, running_days_per_week: u8, long_run_day: LongRunDay) -> WeekShape {
        let target = usize::from(running_days_per_week.min(7));
        let mut shape = WeekShape::rest_week();
        let mut placed = 0;

        if target >= 1 {
            shape.set(long_run_day.weekday(), WorkoutType::LongRun);
            placed += 1;
        }

        for (workout_type, candidates) in QUALITY_RULES {
            if placed >= target {
                break;
            }
            if let Some(day) = first_rest_day(&shape, candidates) {
                shape.set(day, workout_type);
                placed += 1;
            }
        }

        placed += fill_easy_runs(&mut shape, &EASY_RUN_PRIORITY, target.saturating_sub(placed));

        // Only reachable if the priority list ever stops covering the full week
        if placed < target {
            placed += fill_easy_runs(&mut shape, &ALL_WEEKDAYS, target.saturating_sub(placed));
        }

        tracing::trace!(target, placed, ?shape, "Assigned week shape");
        shape
    }
}

fn first_rest_day(shape: &WeekShape, candidates: &[Weekday]) -> Option<Weekday> {
    candidates
        .iter()
        .copied()
        .find(|day| shape.get(*day) == WorkoutType::Rest)
}

/// Turn up to `wanted` rest days into easy runs, in `order`. Returns how many were placed.
fn fill_easy_runs(shape: &mut WeekShape, order: &[Weekday], wanted: usize) -> usize {
    let mut placed = 0;
    for day in order {
        if placed >= wanted {
            break;
        }
        if shape.get(*day) == WorkoutType::Rest {
            shape.set(*day, WorkoutType::EasyRun);
            placed += 1;
        }
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkoutType::*;

    fn assign(days: u8, long_run_day: LongRunDay) -> [WorkoutType; 7] {
        *WeekShapeService::new().assign_week(days, long_run_day).slots()
    }

    #[test]
    fn test_three_days_saturday() {
        // Sun Mon Tue Wed Thu Fri Sat
        assert_eq!(
            assign(3, LongRunDay::Saturday),
            [Rest, Rest, Interval, Rest, Tempo, Rest, LongRun]
        );
    }

    #[test]
    fn test_four_days_sunday() {
        assert_eq!(
            assign(4, LongRunDay::Sunday),
            [LongRun, EasyRun, Interval, Rest, Tempo, Rest, Rest]
        );
    }

    #[test]
    fn test_five_days_saturday() {
        assert_eq!(
            assign(5, LongRunDay::Saturday),
            [Rest, EasyRun, Interval, EasyRun, Tempo, Rest, LongRun]
        );
    }

    #[test]
    fn test_seven_days_fills_week() {
        assert_eq!(
            assign(7, LongRunDay::Saturday),
            [EasyRun, EasyRun, Interval, EasyRun, Tempo, EasyRun, LongRun]
        );
    }

    #[test]
    fn test_single_run_is_long_run_only() {
        let shape = WeekShapeService::new().assign_week(1, LongRunDay::Sunday);
        assert_eq!(shape.run_count(), 1);
        assert_eq!(shape.get(Weekday::Sun), LongRun);
    }

    #[test]
    fn test_two_runs_adds_interval() {
        assert_eq!(
            assign(2, LongRunDay::Saturday),
            [Rest, Rest, Interval, Rest, Rest, Rest, LongRun]
        );
    }

    #[test]
    fn test_zero_and_oversized_counts() {
        assert_eq!(WeekShapeService::new().assign_week(0, LongRunDay::Saturday).run_count(), 0);
        assert_eq!(WeekShapeService::new().assign_week(12, LongRunDay::Sunday).run_count(), 7);
    }
}
