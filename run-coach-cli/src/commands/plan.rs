use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use run_coach::models::PlanWeek;

use crate::config::Config;
use crate::ui;

#[derive(Args)]
pub struct PlanCommand {
    /// Only show this week of the plan
    #[arg(short, long)]
    week: Option<u32>,

    /// Print the plan as JSON
    #[arg(long)]
    json: bool,
}

impl PlanCommand {
    pub fn execute(self, config: &Config) -> Result<()> {
        let service = config.plan_service();

        let workouts = match service.generate(&config.profile) {
            Ok(workouts) => workouts,
            Err(e) => {
                tracing::warn!("Could not build plan: {}", e);
                println!("{}", e.placeholder());
                return Ok(());
            }
        };

        let workouts: Vec<_> = match self.week {
            Some(week) => workouts
                .into_iter()
                .filter(|w| w.week_of_plan == week)
                .collect(),
            None => workouts,
        };

        if self.json {
            let json = serde_json::to_string_pretty(&workouts).context("Failed to serialize plan")?;
            println!("{}", json);
            return Ok(());
        }

        if workouts.is_empty() {
            match self.week {
                Some(week) => println!("No workouts in week {}.", week),
                None => println!("No workouts in this plan."),
            }
            return Ok(());
        }

        let label = config
            .profile
            .training_plan
            .as_deref()
            .and_then(|id| service.catalog().lookup(id).ok())
            .map(|plan| plan.label.clone())
            .unwrap_or_default();

        println!("{}", format!("{} Training Plan", label).bold());
        println!("────────────────────────────────");

        for week in PlanWeek::group(workouts) {
            println!();
            println!("{}", ui::format_week_header(&week));
            for workout in &week.workouts {
                println!("{}", ui::format_day(workout, &config.ui.date_format));
            }
        }

        Ok(())
    }
}
