use crate::models::{validate_plan_duration, PlanCatalog, PlanId, TrainingPlanCatalogEntry};

/// Built-in plan table: (id, label, duration in weeks)
pub const BUILTIN_PLANS: [(PlanId, &str, u32); 5] = [
    (PlanId::FiveK, "5K", 8),
    (PlanId::TenK, "10K", 10),
    (PlanId::HalfMarathon, "Half Marathon", 12),
    (PlanId::Marathon, "Marathon", 16),
    (PlanId::Ultra, "Ultra Marathon", 20),
];

/// Catalog used when the caller does not supply its own entries
pub fn builtin_catalog() -> PlanCatalog {
    PlanCatalog::new(
        BUILTIN_PLANS
            .iter()
            .map(|(id, label, weeks)| TrainingPlanCatalogEntry::new(*id, *label, *weeks))
            .collect(),
    )
}

/// Build a catalog from configured entries, falling back to the built-in
/// table for any plan the configuration leaves out.
pub fn catalog_with_overrides(overrides: &[TrainingPlanCatalogEntry]) -> PlanCatalog {
    for entry in overrides {
        if let Err(e) = validate_plan_duration(entry.id, entry.duration_weeks) {
            tracing::warn!(plan = %entry.id, "Catalog override will not expand: {}", e);
        }
    }

    let entries = BUILTIN_PLANS
        .iter()
        .map(|(id, label, weeks)| {
            overrides
                .iter()
                .find(|entry| entry.id == *id)
                .cloned()
                .unwrap_or_else(|| TrainingPlanCatalogEntry::new(*id, *label, *weeks))
        })
        .collect();

    PlanCatalog::new(entries)
}
