// Discussion Board - API Core
//
// This crate provides the backend core for a discussion board: posts with
// hashtags, threaded comments, likes, and per-viewer view counting. User
// identity lives in a separate service reached over HTTP.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
