use linkup_schema::{ChatMessage, Sender, StoreError};
use tracing::warn;
use uuid::Uuid;

use crate::kv::KvStore;

/// Append-only per-event chat history, one storage key per event. No size
/// bound and no pruning.
pub struct TranscriptLog {
    kv: KvStore,
}

fn history_key(event_id: Uuid) -> String {
    format!("chatHistory_{event_id}")
}

impl TranscriptLog {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    /// Append one turn. Empty input never reaches the transcript.
    pub fn append(&self, event_id: Uuid, sender: Sender, text: &str) -> Result<(), StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::Validation("message must not be empty".into()));
        }
        let key = history_key(event_id);
        let mut history: Vec<ChatMessage> = self.kv.load_json_or_default(&key);
        history.push(ChatMessage {
            sender,
            text: text.to_string(),
        });
        if let Err(error) = self.kv.save_json(&key, &history) {
            warn!(%error, %event_id, "failed to persist chat history");
        }
        Ok(())
    }

    pub fn history(&self, event_id: Uuid) -> Vec<ChatMessage> {
        self.kv.load_json_or_default(&history_key(event_id))
    }

    /// Drop the whole transcript for an event. Returns whether one existed.
    pub fn clear(&self, event_id: Uuid) -> bool {
        self.kv.remove(&history_key(event_id)).unwrap_or(false)
    }
}
