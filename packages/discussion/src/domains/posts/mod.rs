pub mod actions;
pub mod data;
pub mod models;

// Re-export data types (response shapes)
pub use data::post::{CommentData, CommentLikeData, LikeData, PostData, PostResponse, ReplyData};

// Re-export models (domain models)
pub use models::post::Post;
pub use models::post_like::PostLike;
pub use models::post_view::PostView;
