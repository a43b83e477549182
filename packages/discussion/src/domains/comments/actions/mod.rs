//! Comments domain actions - entry-point business logic

pub mod core;
pub mod likes;

// Re-export for convenience
pub use core::*;
pub use likes::{like_comment, unlike_comment};
