use chrono::Weekday;
use colored::{ColoredString, Colorize};

use run_coach::models::{DatedWorkout, PlanWeek, WeekShape, WorkoutType};

use crate::config::UiConfig;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Honor the config's color switch and the NO_COLOR convention
pub fn apply_color_settings(ui: &UiConfig) {
    if !ui.color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }
}

/// Fixed-width, colored label for a workout type
pub fn workout_tag(workout_type: WorkoutType, is_race_day: bool) -> ColoredString {
    if is_race_day {
        return format!("{:<10}", "Race Day").magenta().bold();
    }

    let label = format!("{:<10}", workout_type.label());
    match workout_type {
        WorkoutType::LongRun => label.green().bold(),
        WorkoutType::Interval => label.red(),
        WorkoutType::Tempo => label.yellow(),
        WorkoutType::EasyRun => label.cyan(),
        WorkoutType::Rest => label.dimmed(),
    }
}

/// One line of the calendar: date, workout tag, description
pub fn format_day(workout: &DatedWorkout, date_format: &str) -> String {
    let taper = if workout.is_taper { " (taper)".italic().to_string() } else { String::new() };
    format!(
        "  {}  {}{}  {}",
        workout.date.format(date_format),
        workout_tag(workout.workout_type, workout.is_race_day),
        taper,
        workout.description
    )
}

pub fn format_week_header(week: &PlanWeek) -> String {
    format!(
        "{}  {} runs, {} min",
        format!("Week {}", week.week_number).bold(),
        week.run_days,
        week.total_minutes
    )
}

/// Sunday-first listing of a week shape, one weekday per line
pub fn format_week_shape(shape: &WeekShape) -> Vec<String> {
    WEEKDAYS
        .iter()
        .map(|day| {
            let workout_type = shape.get(*day);
            format!("  {}  {}", day, workout_tag(workout_type, false))
                .trim_end()
                .to_string()
        })
        .collect()
}
