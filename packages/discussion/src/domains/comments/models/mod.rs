pub mod comment;
pub mod comment_like;
pub mod reply;

pub use comment::Comment;
pub use comment_like::CommentLike;
pub use reply::Reply;
