use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use colored::Colorize;
use std::path::Path;
use std::process::Command;

use run_coach::models::{LongRunDay, PlanId, RunningLevel};

use super::parse_date;
use crate::config::Config;

#[derive(Args)]
pub struct ProfileInitArgs {
    /// Overwrite an existing configuration file
    #[arg(long)]
    force: bool,

    /// Training plan id (5k, 10k, half-marathon, marathon, ultra)
    #[arg(long)]
    plan: Option<PlanId>,

    /// Running level (beginner, intermediate, advanced)
    #[arg(long)]
    level: Option<RunningLevel>,

    /// Plan start date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    start: Option<NaiveDate>,

    /// Race date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    race: Option<NaiveDate>,

    /// Running days per week (3-7)
    #[arg(long)]
    days: Option<u8>,

    /// Long run day: saturday or sunday
    #[arg(long)]
    long_run: Option<LongRunDay>,
}

pub fn show_profile(path: &Path) -> Result<()> {
    let config = Config::load_from(path)?;
    let config_str = toml::to_string_pretty(&config)?;

    println!("Current Configuration ({})", path.display());
    println!("────────────────────────────────");
    println!();
    println!("{}", config_str);

    if let Err(e) = config.profile.validate() {
        println!("{} {}", "Warning:".yellow().bold(), e);
    }

    Ok(())
}

pub fn edit_profile(path: &Path) -> Result<()> {
    // Ensure config file exists
    if !path.exists() {
        Config::default().save_to(path)?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vim".to_string());

    Command::new(&editor)
        .arg(path)
        .status()
        .with_context(|| format!("Failed to launch editor '{}'", editor))?;

    let config = Config::load_from(path)?;
    if let Err(e) = config.profile.validate() {
        println!("{} {}", "Warning:".yellow().bold(), e);
    }

    println!("✓ Configuration saved!");

    Ok(())
}

pub fn init_profile(path: &Path, args: ProfileInitArgs) -> Result<()> {
    if path.exists() && !args.force {
        println!("Configuration file already exists at: {}", path.display());
        println!("Use --force to overwrite");
        return Ok(());
    }

    let mut config = Config::default();
    let profile = &mut config.profile;
    profile.training_plan = args.plan.map(|id| id.as_str().to_string());
    profile.running_level = args.level;
    profile.plan_start_date = args.start;
    profile.race_date = args.race;
    if let Some(days) = args.days {
        profile.running_days_per_week = days;
    }
    if let Some(long_run) = args.long_run {
        profile.long_run_day = long_run;
    }

    if let Err(e) = config.profile.validate() {
        tracing::warn!("Saving incomplete profile: {}", e);
        println!("{} {}", "Warning:".yellow().bold(), e);
    }

    config.save_to(path)?;

    println!("✓ Configuration initialized at: {}", path.display());
    println!();
    println!("You can edit it with: run-coach profile edit");

    Ok(())
}
