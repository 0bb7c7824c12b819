pub mod export;
pub mod pipeline;
pub mod qr;

pub use export::{build_export, ExportBundle};
pub use pipeline::group_by_status;
pub use qr::{extract_username, is_valid_profile_link};
