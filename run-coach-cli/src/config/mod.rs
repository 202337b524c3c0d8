use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use run_coach::config::catalog_with_overrides;
use run_coach::models::{PlanCatalog, TrainingPlanCatalogEntry, UserProfile};
use run_coach::PlanExpansionService;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: UserProfile,

    #[serde(default)]
    pub ui: UiConfig,

    /// Replacements for built-in plan catalog entries
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub catalog: Vec<TrainingPlanCatalogEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default = "default_true")]
    pub color: bool,
}

// Default value functions
fn default_date_format() -> String {
    "%a %Y-%m-%d".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            color: default_true(),
        }
    }
}

impl Config {
    /// Get config directory path (~/.run-coach/)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".run-coach"))
    }

    /// Get default config file path (~/.run-coach/config.toml)
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Explicit path (from --config or RUN_COACH_CONFIG) wins over the default location
    pub fn resolve_path(explicit: Option<&str>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(PathBuf::from(path)),
            None => Self::config_file(),
        }
    }

    /// Load configuration from file, falling back to defaults when it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("Config file not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Plan catalog with any configured overrides applied
    pub fn plan_catalog(&self) -> PlanCatalog {
        catalog_with_overrides(&self.catalog)
    }

    pub fn plan_service(&self) -> PlanExpansionService {
        PlanExpansionService::new(self.plan_catalog())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use run_coach::models::{LongRunDay, PlanId, RunningLevel};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ui.date_format, "%a %Y-%m-%d");
        assert!(config.ui.color);
        assert!(config.profile.training_plan.is_none());
        assert!(config.catalog.is_empty());
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.profile.running_level = Some(RunningLevel::Advanced);
        config.profile.training_plan = Some("marathon".to_string());
        config.profile.plan_start_date = NaiveDate::from_ymd_opt(2024, 1, 1);
        config.profile.long_run_day = LongRunDay::Sunday;

        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(config.profile, deserialized.profile);
        assert_eq!(config.ui.date_format, deserialized.ui.date_format);
    }

    #[test]
    fn test_catalog_overrides_from_toml() {
        let config: Config = toml::from_str(
            r#"
            [profile]
            training_plan = "10k"

            [[catalog]]
            id = "10k"
            label = "Autumn 10K"
            duration_weeks = 6
            "#,
        )
        .unwrap();

        let catalog = config.plan_catalog();
        let ten_k = catalog.get(PlanId::TenK).unwrap();
        assert_eq!(ten_k.label, "Autumn 10K");
        assert_eq!(ten_k.duration_weeks, 6);
        assert_eq!(catalog.get(PlanId::Marathon).unwrap().duration_weeks, 16);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.profile.running_days_per_week, 3);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.profile.training_plan = Some("half-marathon".to_string());
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.profile.training_plan.as_deref(), Some("half-marathon"));
    }
}
