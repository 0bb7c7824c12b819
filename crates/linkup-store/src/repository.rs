use linkup_schema::{Connection, Event, LeadStatus, StoreError};
use tracing::warn;
use uuid::Uuid;

use crate::kv::KvStore;

/// Storage key holding the JSON array of events.
pub const EVENTS_KEY: &str = "eventsData";

/// Owns the events collection and its persistence. All reads and writes go
/// through this type; nothing else touches the `eventsData` key.
///
/// Every mutation re-serializes the whole collection. The dataset is one
/// person's scanned contacts, so no delta writes.
pub struct EventRepository {
    kv: KvStore,
    events: Vec<Event>,
}

impl EventRepository {
    /// Load the collection from storage. Records written before the lead
    /// pipeline existed deserialize with `status = New`; if that (or any
    /// other normalization) changed the stored form, the normalized
    /// collection is written back immediately.
    pub fn open(kv: KvStore) -> Self {
        let raw = kv.load_string(EVENTS_KEY);
        let events: Vec<Event> = raw
            .as_deref()
            .map(|raw| match serde_json::from_str(raw) {
                Ok(events) => events,
                Err(error) => {
                    warn!(%error, "discarding undeserializable events collection");
                    Vec::new()
                }
            })
            .unwrap_or_default();

        let repo = Self { kv, events };
        if let Some(raw) = raw {
            let stored: Option<serde_json::Value> = serde_json::from_str(&raw).ok();
            let normalized = serde_json::to_value(&repo.events).ok();
            if stored != normalized {
                repo.persist();
            }
        }
        repo
    }

    fn persist(&self) {
        // The in-memory collection stays authoritative; a failed write is
        // retried implicitly by the full rewrite on the next mutation.
        if let Err(error) = self.kv.save_json(EVENTS_KEY, &self.events) {
            warn!(%error, "failed to persist events collection");
        }
    }

    pub fn list_events(&self) -> &[Event] {
        &self.events
    }

    pub fn event(&self, id: Uuid) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    fn event_mut(&mut self, id: Uuid) -> Result<&mut Event, StoreError> {
        self.events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or(StoreError::EventNotFound(id))
    }

    pub fn create_event(&mut self, name: &str) -> Result<Event, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::Validation(
                "event name must not be empty".into(),
            ));
        }
        let event = Event::new(name);
        self.events.push(event.clone());
        self.persist();
        Ok(event)
    }

    pub fn add_connection(
        &mut self,
        event_id: Uuid,
        user_link: &str,
        notes: &str,
    ) -> Result<Connection, StoreError> {
        let event = self.event_mut(event_id)?;
        let connection = Connection::new(user_link, notes);
        event.connections.push(connection.clone());
        self.persist();
        Ok(connection)
    }

    /// Remove by position. A stale index simply acts on whatever occupies
    /// that position now; repeated calls are not idempotent.
    pub fn remove_connection(&mut self, event_id: Uuid, index: usize) -> Result<(), StoreError> {
        let event = self.event_mut(event_id)?;
        if index >= event.connections.len() {
            return Err(StoreError::ConnectionIndex(index));
        }
        event.connections.remove(index);
        self.persist();
        Ok(())
    }

    /// Move a connection to a new pipeline status. Any status may follow
    /// any other; validity of the status value itself is enforced where
    /// strings are parsed.
    pub fn set_status(
        &mut self,
        event_id: Uuid,
        index: usize,
        status: LeadStatus,
    ) -> Result<(), StoreError> {
        let event = self.event_mut(event_id)?;
        let connection = event
            .connections
            .get_mut(index)
            .ok_or(StoreError::ConnectionIndex(index))?;
        connection.status = status;
        self.persist();
        Ok(())
    }
}
