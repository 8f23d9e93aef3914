use serde::Serialize;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry. Append order is display order.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

pub const GREETING: &str = "Hi! I'm your AI nutrition assistant. How can I help you today?";

/// Append-only transcript for the session. The user append and the delayed
/// assistant append race, so both go through the writer lock.
#[derive(Debug)]
pub struct ChatStore {
    messages: RwLock<Vec<ChatMessage>>,
}

impl ChatStore {
    /// Transcript opened with the assistant greeting.
    pub fn seeded() -> Self {
        Self {
            messages: RwLock::new(vec![ChatMessage::assistant(GREETING)]),
        }
    }

    pub async fn append(&self, message: ChatMessage) {
        self.messages.write().await.push(message);
    }

    pub async fn snapshot(&self) -> Vec<ChatMessage> {
        self.messages.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_transcript_opens_with_the_greeting() {
        let store = ChatStore::seeded();
        let messages = store.snapshot().await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, Role::Assistant);
        assert_eq!(messages[0].content, GREETING);
    }

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_string(&ChatMessage::user("hello")).unwrap();
        assert_eq!(json, "{\"role\":\"user\",\"content\":\"hello\"}");
    }
}
