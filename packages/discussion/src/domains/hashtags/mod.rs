pub mod actions;
pub mod models;

// Re-export commonly used types
pub use actions::{parse_tags, reconcile};
pub use models::Hashtag;
