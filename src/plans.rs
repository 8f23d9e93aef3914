//! Static meal and workout plans. Fixed content for now; a coaching backend
//! would generate these per user.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PlanMeal {
    pub title: &'static str,
    pub time: &'static str,
    pub items: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct WorkoutExercise {
    pub name: &'static str,
    pub sets_reps: &'static str,
}

#[derive(Debug, Serialize)]
pub struct WorkoutPlan {
    pub title: &'static str,
    pub exercises: Vec<WorkoutExercise>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/plans/nutrition", get(nutrition_plan))
        .route("/plans/workout", get(workout_plan))
}

pub async fn nutrition_plan() -> Json<Vec<PlanMeal>> {
    Json(vec![
        PlanMeal {
            title: "Breakfast",
            time: "08:00",
            items: vec![
                "3 scrambled eggs with spinach",
                "2 slices of whole-grain bread",
                "1 banana",
                "Coffee with skim milk",
            ],
        },
        PlanMeal {
            title: "Morning snack",
            time: "10:30",
            items: vec![
                "Plain Greek yogurt",
                "30g of granola",
                "Mixed berries",
            ],
        },
        PlanMeal {
            title: "Lunch",
            time: "12:30",
            items: vec![
                "150g of grilled chicken",
                "100g of brown rice",
                "Green salad with olive oil",
                "Steamed vegetables",
            ],
        },
    ])
}

pub async fn workout_plan() -> Json<WorkoutPlan> {
    Json(WorkoutPlan {
        title: "Workout A - Chest & Triceps",
        exercises: vec![
            WorkoutExercise {
                name: "Flat bench press",
                sets_reps: "4x12",
            },
            WorkoutExercise {
                name: "Incline bench press",
                sets_reps: "4x10",
            },
            WorkoutExercise {
                name: "Dumbbell fly",
                sets_reps: "3x15",
            },
            WorkoutExercise {
                name: "Skull crusher",
                sets_reps: "4x12",
            },
            WorkoutExercise {
                name: "Rope pushdown",
                sets_reps: "3x15",
            },
        ],
    })
}
