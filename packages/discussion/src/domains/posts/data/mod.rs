pub mod post;

pub use post::{CommentData, CommentLikeData, LikeData, PostData, PostResponse, ReplyData};
