use tracing::warn;

use crate::kv::KvStore;

/// Storage key for the reusable intro-message template. The value is the
/// raw string, not JSON.
pub const BLURB_KEY: &str = "blurbMessage";

pub struct BlurbStore {
    kv: KvStore,
}

impl BlurbStore {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    pub fn get(&self) -> String {
        self.kv.load_string(BLURB_KEY).unwrap_or_default()
    }

    pub fn set(&self, text: &str) {
        if let Err(error) = self.kv.save_string(BLURB_KEY, text) {
            warn!(%error, "failed to persist blurb");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_empty_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let kv = KvStore::open(dir.path()).unwrap();
        let blurbs = BlurbStore::new(kv);
        assert_eq!(blurbs.get(), "");
        blurbs.set("Hi! Great meeting you at the event.");
        assert_eq!(blurbs.get(), "Hi! Great meeting you at the event.");
    }
}
