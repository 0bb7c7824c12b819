use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the store and its consumers. Nothing here is fatal:
/// callers map these to user-visible messages and carry on.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("event not found: {0}")]
    EventNotFound(Uuid),
    #[error("no connection at index {0}")]
    ConnectionIndex(usize),
}

/// A user-created grouping of connections (e.g. one networking event).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            connections: Vec::new(),
        }
    }
}

/// A captured contact: a validated Telegram profile link plus notes.
///
/// Serialized field names and the epoch-millisecond timestamp match the
/// layout recorded under the `eventsData` storage key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub user_link: String,
    #[serde(default)]
    pub notes: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: LeadStatus,
}

impl Connection {
    pub fn new(user_link: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            user_link: user_link.into(),
            notes: notes.into(),
            timestamp: Utc::now(),
            status: LeadStatus::New,
        }
    }
}

/// Lead pipeline status. The listed order is the kanban display-column
/// order only; any status may move to any other.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Interested,
    Converted,
}

impl LeadStatus {
    /// All statuses in display order.
    pub const ALL: [LeadStatus; 4] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Interested,
        LeadStatus::Converted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Interested => "Interested",
            LeadStatus::Converted => "Converted",
        }
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LeadStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(LeadStatus::New),
            "Contacted" => Ok(LeadStatus::Contacted),
            "Interested" => Ok(LeadStatus::Interested),
            "Converted" => Ok(LeadStatus::Converted),
            other => Err(StoreError::Validation(format!(
                "unknown lead status: {other}"
            ))),
        }
    }
}

/// Stored records written before the pipeline existed have no status field,
/// and the store is user-owned local data with no validation layer in front
/// of it. Anything missing, null, or outside the enumeration reads as New;
/// the repository persists the normalized form back on first load.
fn lenient_status<'de, D>(deserializer: D) -> Result<LeadStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .and_then(|s| s.parse().ok())
        .unwrap_or_default())
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

/// One turn of the per-event assistant transcript, stored under
/// `chatHistory_<eventId>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}
