pub mod task;
pub mod manifest;
pub mod report;
pub mod error;

// Re-exports
pub use task::UploadTask;
pub use manifest::{load_manifest, parse_spec, ManifestEntry};
pub use report::{UploadOutcome, UploadReport};
pub use error::{Error, Result};
