use serde::Serialize;
use uuid::Uuid;

use super::nutrition::{DailyGoals, MacroProgress, MacroSet};
use super::store::Meal;

#[derive(Debug, Serialize)]
pub struct MealResponse {
    pub id: Uuid,
    pub name: String,
    pub time: String,
    pub macros: MacroSet,
}

impl From<Meal> for MealResponse {
    fn from(m: Meal) -> Self {
        Self {
            id: m.id,
            name: m.name,
            time: m.time,
            macros: m.macros,
        }
    }
}

/// Everything the dashboard tab renders: day totals, the goals they are
/// measured against, the raw progress fractions and the meal list.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub totals: MacroSet,
    pub goals: DailyGoals,
    pub progress: MacroProgress,
    pub meals: Vec<MealResponse>,
}

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    /// `null` when no file was attached; the scan is then a no-op.
    pub meal: Option<MealResponse>,
}
