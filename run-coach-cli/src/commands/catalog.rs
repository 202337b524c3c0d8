use anyhow::Result;
use clap::Args;
use colored::Colorize;

use run_coach::models::PlanId;

use crate::config::Config;

#[derive(Args)]
pub struct CatalogCommand {}

impl CatalogCommand {
    pub fn execute(self, config: &Config) -> Result<()> {
        let selected = config.profile.training_plan.as_deref();

        println!("Training Plans");
        println!("────────────────────────────────");
        for plan in config.plan_catalog().entries() {
            let line = format!("  {:<15} {:<18} {} weeks", plan.id.as_str(), plan.label, plan.duration_weeks);
            if selected.and_then(|s| s.parse::<PlanId>().ok()) == Some(plan.id) {
                println!("{} {}", line.green(), "(selected)".green());
            } else {
                println!("{}", line);
            }
        }

        Ok(())
    }
}
