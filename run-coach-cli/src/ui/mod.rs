// Terminal rendering helpers for plan output

mod calendar;

pub use calendar::{
    apply_color_settings, format_day, format_week_header, format_week_shape, workout_tag,
};
