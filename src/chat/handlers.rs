use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use super::dto::SendMessageRequest;
use super::services;
use super::store::ChatMessage;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/chat/messages", get(list_messages).post(send_message))
}

#[instrument(skip(state))]
pub async fn list_messages(State(state): State<AppState>) -> Json<Vec<ChatMessage>> {
    Json(state.chat.snapshot().await)
}

/// POST /chat/messages
/// Responds with the transcript as of the immediate user append; the
/// assistant reply lands later. A blank message changes nothing and still
/// gets a plain 200, never an error.
#[instrument(skip(state, body))]
pub async fn send_message(
    State(state): State<AppState>,
    Json(body): Json<SendMessageRequest>,
) -> Json<Vec<ChatMessage>> {
    services::send(&state, &body.content).await;
    Json(state.chat.snapshot().await)
}
