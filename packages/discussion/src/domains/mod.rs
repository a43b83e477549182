// Business domains
pub mod comments;
pub mod hashtags;
pub mod posts;
