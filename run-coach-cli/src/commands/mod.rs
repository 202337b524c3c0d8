mod catalog;
mod plan;
mod profile_cmd;
mod status;
mod today;
mod week_shape;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::Path;

use crate::config::Config;
use crate::ui;

pub use catalog::CatalogCommand;
pub use plan::PlanCommand;
pub use profile_cmd::ProfileInitArgs;
pub use status::StatusCommand;
pub use today::TodayCommand;
pub use week_shape::WeekShapeCommand;

#[derive(Parser)]
#[command(name = "run-coach")]
#[command(about = "Personal running coach: training plans from your profile", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "RUN_COACH_CONFIG")]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the full training plan calendar
    Plan(PlanCommand),

    /// Show today's workout
    Today(TodayCommand),

    /// Show where the plan stands (not started, in progress, ending soon, ended)
    Status(StatusCommand),

    /// Show how running days are spread over a week
    WeekShape(WeekShapeCommand),

    /// List the selectable training plans
    Catalog(CatalogCommand),

    /// Manage the runner profile
    #[command(subcommand)]
    Profile(ProfileSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ProfileSubcommands {
    /// Show the current profile and configuration
    Show,

    /// Edit the configuration file
    Edit,

    /// Initialize configuration, optionally filling in the profile
    Init(ProfileInitArgs),
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        if self.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        let config_path = Config::resolve_path(self.config.as_deref())?;

        match self.command {
            Commands::Profile(subcmd) => match subcmd {
                ProfileSubcommands::Show => profile_cmd::show_profile(&config_path),
                ProfileSubcommands::Edit => profile_cmd::edit_profile(&config_path),
                ProfileSubcommands::Init(args) => profile_cmd::init_profile(&config_path, args),
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
            Commands::Plan(cmd) => cmd.execute(&load_config(&config_path)?),
            Commands::Today(cmd) => cmd.execute(&load_config(&config_path)?),
            Commands::Status(cmd) => cmd.execute(&load_config(&config_path)?),
            Commands::WeekShape(cmd) => cmd.execute(&load_config(&config_path)?),
            Commands::Catalog(cmd) => cmd.execute(&load_config(&config_path)?),
        }
    }
}

fn load_config(path: &Path) -> Result<Config> {
    let config = Config::load_from(path)?;
    ui::apply_color_settings(&config.ui);
    Ok(config)
}

/// Parse a YYYY-MM-DD date argument
pub(crate) fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("Invalid date '{}' (expected YYYY-MM-DD): {}", value, e))
}

/// The date to evaluate against: the explicit --date, or the local calendar day
pub(crate) fn date_or_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| chrono::Local::now().date_naive())
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-01-06"), Ok(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()));
        assert!(parse_date("06/01/2024").is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
