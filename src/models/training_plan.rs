use serde::{Deserialize, Serialize};

use crate::errors::PlanError;

/// Selectable training plan identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanId {
    #[serde(rename = "5k")]
    FiveK,
    #[serde(rename = "10k")]
    TenK,
    #[serde(rename = "half-marathon")]
    HalfMarathon,
    #[serde(rename = "marathon")]
    Marathon,
    #[serde(rename = "ultra")]
    Ultra,
}

/// Plan family used to pick the long-run ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PlanFamily {
    Other,
    Half,
    Marathon,
    Ultra,
}

impl PlanId {
    pub fn family(&self) -> PlanFamily {
        match self {
            PlanId::Ultra => PlanFamily::Ultra,
            PlanId::Marathon => PlanFamily::Marathon,
            PlanId::HalfMarathon => PlanFamily::Half,
            PlanId::FiveK | PlanId::TenK => PlanFamily::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanId::FiveK => "5k",
            PlanId::TenK => "10k",
            PlanId::HalfMarathon => "half-marathon",
            PlanId::Marathon => "marathon",
            PlanId::Ultra => "ultra",
        }
    }
}

impl std::fmt::Display for PlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PlanId {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "5k" => Ok(PlanId::FiveK),
            "10k" => Ok(PlanId::TenK),
            "half-marathon" | "half" => Ok(PlanId::HalfMarathon),
            "marathon" => Ok(PlanId::Marathon),
            "ultra" => Ok(PlanId::Ultra),
            _ => Err(PlanError::UnknownPlan(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPlanCatalogEntry {
    pub id: PlanId,
    pub label: String,
    pub duration_weeks: u32,
}

impl TrainingPlanCatalogEntry {
    pub fn new(id: PlanId, label: impl Into<String>, duration_weeks: u32) -> Self {
        Self {
            id,
            label: label.into(),
            duration_weeks,
        }
    }

    pub fn duration_days(&self) -> i64 {
        i64::from(self.duration_weeks) * 7
    }
}

/// Read-only table of selectable plans, injected into the services at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanCatalog {
    entries: Vec<TrainingPlanCatalogEntry>,
}

impl PlanCatalog {
    pub fn new(entries: Vec<TrainingPlanCatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[TrainingPlanCatalogEntry] {
        &self.entries
    }

    pub fn get(&self, id: PlanId) -> Option<&TrainingPlanCatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Look up a plan by its identifier string (e.g. "half-marathon")
    pub fn lookup(&self, identifier: &str) -> Result<&TrainingPlanCatalogEntry, PlanError> {
        let id: PlanId = identifier.parse()?;
        self.get(id)
            .ok_or_else(|| PlanError::UnknownPlan(identifier.to_string()))
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        crate::config::builtin_catalog()
    }
}
