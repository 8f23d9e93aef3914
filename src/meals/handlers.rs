use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use super::dto::{DashboardResponse, MealResponse, ScanResponse};
use super::nutrition::{progress, sum_macros};
use super::services::{self, CapturedImage};
use crate::state::AppState;

// --- public routers ---

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", get(list_meals))
        .route("/dashboard", get(dashboard))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/meals/scan", post(scan_meal))
        .layer(DefaultBodyLimit::max(20 * 1024 * 1024)) // 20MB
}

// --- handlers ---

#[instrument(skip(state))]
pub async fn list_meals(State(state): State<AppState>) -> Json<Vec<MealResponse>> {
    let meals = state.meals.snapshot().await;
    Json(meals.into_iter().map(MealResponse::from).collect())
}

#[instrument(skip(state))]
pub async fn dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let meals = state.meals.snapshot().await;
    let totals = sum_macros(&meals);
    let goals = state.config.goals;
    Json(DashboardResponse {
        totals,
        goals,
        progress: progress(&totals, &goals),
        meals: meals.into_iter().map(MealResponse::from).collect(),
    })
}

/// POST /meals/scan (multipart)
/// Field: file (one image). No file attached is not an error: the scan is
/// skipped and the response carries `meal: null`.
#[instrument(skip(state, mp))]
pub async fn scan_meal(State(state): State<AppState>, mut mp: Multipart) -> Json<ScanResponse> {
    let mut image: Option<CapturedImage> = None;
    while let Ok(Some(field)) = mp.next_field().await {
        if field.name() == Some("file") {
            let content_type = field
                .content_type()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "application/octet-stream".into());
            if let Ok(body) = field.bytes().await {
                image = Some(CapturedImage { body, content_type });
            }
            break;
        }
    }

    let meal = services::capture(&state, image).await;
    Json(ScanResponse {
        meal: meal.map(MealResponse::from),
    })
}
