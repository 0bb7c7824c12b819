use std::sync::{Arc, Mutex};

use linkup_provider::LlmProvider;
use linkup_store::{BlurbStore, EventRepository, TranscriptLog};

/// Shared application state accessible from all route handlers.
///
/// The repository is the single logical writer of the events collection;
/// every operation takes the lock, runs to completion, and releases it
/// before anything awaits.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Mutex<EventRepository>>,
    pub transcripts: Arc<TranscriptLog>,
    pub blurbs: Arc<BlurbStore>,
    pub provider: Arc<dyn LlmProvider>,
    /// Model identifier forwarded with every chat completion.
    pub model: String,
}
