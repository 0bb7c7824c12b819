pub mod blurb;
pub mod kv;
pub mod repository;
pub mod transcript;

pub use blurb::BlurbStore;
pub use kv::KvStore;
pub use repository::EventRepository;
pub use transcript::TranscriptLog;
