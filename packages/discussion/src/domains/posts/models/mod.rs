pub mod post;
pub mod post_like;
pub mod post_view;

pub use post::Post;
pub use post_like::PostLike;
pub use post_view::PostView;
