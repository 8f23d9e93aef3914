use std::time::Duration;

use tracing::debug;

use super::store::ChatMessage;
use crate::state::AppState;

/// Handles one user send.
///
/// Whitespace-only input is silently dropped. Otherwise the user message is
/// appended right away and a deferred task is spawned to append one canned
/// assistant reply after the configured delay. Each send gets its own task;
/// overlapping sends resolve independently in delay-elapse order, and a
/// scheduled reply always fires.
pub async fn send(state: &AppState, text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }

    state.chat.append(ChatMessage::user(trimmed)).await;

    let chat = state.chat.clone();
    let picker = state.picker.clone();
    let delay = Duration::from_millis(state.config.reply_delay_ms);
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let reply = picker.pick();
        debug!(reply = %reply, "assistant reply (simulated)");
        chat.append(ChatMessage::assistant(reply)).await;
    });

    true
}
