pub mod client;
pub mod repository;
pub mod auth;
pub mod error;

// Re-exports
pub use client::ContentsClient;
pub use repository::Repository;
pub use auth::resolve_token;
pub use error::{Error, Result};
