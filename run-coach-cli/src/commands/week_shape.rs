use anyhow::Result;
use clap::Args;

use run_coach::models::{validate_running_days, LongRunDay};
use run_coach::WeekShapeService;

use crate::config::Config;
use crate::ui;

#[derive(Args)]
pub struct WeekShapeCommand {
    /// Running days per week (defaults to the profile's)
    #[arg(short, long)]
    days: Option<u8>,

    /// Long run day: saturday or sunday (defaults to the profile's)
    #[arg(short, long)]
    long_run: Option<LongRunDay>,
}

impl WeekShapeCommand {
    pub fn execute(self, config: &Config) -> Result<()> {
        let days = self.days.unwrap_or(config.profile.running_days_per_week);
        let long_run_day = self.long_run.unwrap_or(config.profile.long_run_day);

        if let Err(e) = validate_running_days(days) {
            tracing::warn!("{}", e);
        }

        let shape = WeekShapeService::new().assign_week(days, long_run_day);

        println!("Week shape: {} running days, long run on {}", shape.run_count(), long_run_day);
        println!();
        for line in ui::format_week_shape(&shape) {
            println!("{}", line);
        }

        Ok(())
    }
}
