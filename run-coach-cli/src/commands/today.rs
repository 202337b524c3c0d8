use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use colored::Colorize;

use super::{date_or_today, parse_date};
use crate::config::Config;

#[derive(Args)]
pub struct TodayCommand {
    /// Evaluate as if today were this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,
}

impl TodayCommand {
    pub fn execute(self, config: &Config) -> Result<()> {
        let service = config.plan_service();
        let today = date_or_today(self.date);

        println!("{}", format!("Today's Workout ({})", today.format(&config.ui.date_format)).bold());
        println!();
        println!("{}", service.todays_workout_on(&config.profile, today));

        if service.is_ending_soon_on(&config.profile, today) {
            println!();
            println!("{}", "Your plan is ending soon. Time to pick your next goal!".yellow());
        }

        Ok(())
    }
}
