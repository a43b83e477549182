//! Posts domain actions - entry-point business logic
//!
//! Actions are self-contained: they authenticate the caller token, run
//! ownership checks, and return final models/results.

pub mod aggregate;
pub mod core;
pub mod likes;
pub mod media;
pub mod views;

// Re-export for convenience
pub use aggregate::aggregate_post;
pub use core::*;
pub use likes::{like_post, unlike_post};
pub use media::upload_image;
pub use views::record_view;
