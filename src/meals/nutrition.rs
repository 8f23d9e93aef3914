use serde::{Deserialize, Serialize};

use super::store::Meal;

/// Protein, carbs and fats in grams; calories in kcal.
///
/// Calories are an independent field: the reference never derives them from
/// the 4-4-9 kcal/gram relationship, and neither do we.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroSet {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub calories: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DailyGoals {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub calories: f64,
}

/// Per-macro fraction of the daily goal. Not clamped; values above 1.0 mean
/// the goal was exceeded and clamping for display is the client's business.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroProgress {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub calories: f64,
}

/// Field-wise sum over the day's meals. Empty input sums to all zeroes.
pub fn sum_macros(meals: &[Meal]) -> MacroSet {
    meals.iter().fold(MacroSet::default(), |acc, meal| MacroSet {
        protein: acc.protein + meal.macros.protein,
        carbs: acc.carbs + meal.macros.carbs,
        fats: acc.fats + meal.macros.fats,
        calories: acc.calories + meal.macros.calories,
    })
}

pub fn progress(totals: &MacroSet, goals: &DailyGoals) -> MacroProgress {
    MacroProgress {
        protein: fraction(totals.protein, goals.protein),
        carbs: fraction(totals.carbs, goals.carbs),
        fats: fraction(totals.fats, goals.fats),
        calories: fraction(totals.calories, goals.calories),
    }
}

// Goals are env-configurable, so a zero goal is reachable; it reads as "no
// target" and progress against it is defined as 0.
fn fraction(value: f64, goal: f64) -> f64 {
    if goal > 0.0 {
        value / goal
    } else {
        0.0
    }
}
