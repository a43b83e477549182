pub mod actions;
pub mod models;

// Re-export models (domain models)
pub use models::{Comment, CommentLike, Reply};
