use bytes::Bytes;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::debug;

use super::store::Meal;
use crate::state::AppState;

/// An image the user picked for scanning. The body is carried only so the
/// upload round-trips like a real one; no byte of it is ever inspected.
pub struct CapturedImage {
    pub body: Bytes,
    pub content_type: String,
}

/// Simulated food scan: fabricates macros for the uploaded photo and logs the
/// result as a new meal. No file selected means nothing happens.
pub async fn capture(state: &AppState, image: Option<CapturedImage>) -> Option<Meal> {
    let image = image?;
    debug!(
        content_type = %image.content_type,
        size = image.body.len(),
        "scanning meal photo (simulated)"
    );

    let meal = Meal::new("Scanned meal", clock_time_now(), state.sampler.sample());
    state.meals.append(meal.clone()).await;
    Some(meal)
}

/// Current wall-clock time as "HH:MM", local when the offset is known.
fn clock_time_now() -> String {
    let format = format_description!("[hour]:[minute]");
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(&format).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> CapturedImage {
        CapturedImage {
            body: Bytes::from_static(b"not a real jpeg"),
            content_type: "image/jpeg".into(),
        }
    }

    #[tokio::test]
    async fn capture_appends_one_meal_with_in_range_macros() {
        let state = AppState::fake();
        let before = state.meals.snapshot().await.len();

        let meal = capture(&state, Some(image()))
            .await
            .expect("capture with a file should produce a meal");

        assert_eq!(state.meals.snapshot().await.len(), before + 1);
        assert_eq!(meal.name, "Scanned meal");
        assert!((20.0..60.0).contains(&meal.macros.protein));
        assert!((30.0..90.0).contains(&meal.macros.carbs));
        assert!((10.0..30.0).contains(&meal.macros.fats));
        assert!((300.0..700.0).contains(&meal.macros.calories));
    }

    #[tokio::test]
    async fn capture_ids_are_unique_within_the_session() {
        let state = AppState::fake();
        let a = capture(&state, Some(image())).await.expect("first capture");
        let b = capture(&state, Some(image())).await.expect("second capture");

        let ids: Vec<_> = state.meals.snapshot().await.iter().map(|m| m.id).collect();
        assert!(ids.contains(&a.id));
        assert!(ids.contains(&b.id));
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn capture_without_a_file_is_a_no_op() {
        let state = AppState::fake();
        let before = state.meals.snapshot().await.len();

        assert!(capture(&state, None).await.is_none());
        assert_eq!(state.meals.snapshot().await.len(), before);
    }

    #[test]
    fn clock_time_is_hour_colon_minute() {
        let t = clock_time_now();
        assert_eq!(t.len(), 5);
        assert_eq!(&t[2..3], ":");
        assert!(t[0..2].parse::<u8>().expect("hour digits") < 24);
        assert!(t[3..5].parse::<u8>().expect("minute digits") < 60);
    }
}
