use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use colored::Colorize;

use run_coach::models::PlanStatus;

use super::{date_or_today, parse_date};
use crate::config::Config;

#[derive(Args)]
pub struct StatusCommand {
    /// Evaluate as if today were this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,
}

impl StatusCommand {
    pub fn execute(self, config: &Config) -> Result<()> {
        let service = config.plan_service();
        let today = date_or_today(self.date);
        let profile = &config.profile;

        let status = match service.plan_status_on(profile, today) {
            Ok(status) => status,
            Err(e) => {
                tracing::warn!("Could not determine plan status: {}", e);
                println!("{}", e.placeholder());
                return Ok(());
            }
        };

        let styled = match status {
            PlanStatus::NotStarted { .. } => status.to_string().cyan(),
            PlanStatus::InProgress { .. } => status.to_string().green(),
            PlanStatus::EndingSoon { .. } => status.to_string().yellow(),
            PlanStatus::Ended { .. } => status.to_string().dimmed(),
        };

        println!("Plan Status");
        println!("────────────────────────────────");
        println!("Status:       {}", styled);
        if let Ok(end) = service.plan_end_date(profile) {
            println!("Plan ends:    {}", end.format(&config.ui.date_format));
        }
        if let Some(days) = service.days_until_race_on(profile, today).filter(|d| *d >= 0) {
            println!("Race in:      {} days", days);
        }
        println!("Ending soon:  {}", service.is_ending_soon_on(profile, today));
        println!("Ended:        {}", service.is_ended_on(profile, today));

        Ok(())
    }
}
