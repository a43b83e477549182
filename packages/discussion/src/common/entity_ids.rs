//! Typed ID definitions for all domain entities.
//!
//! This module defines type aliases for each domain entity, providing
//! compile-time type safety for ID usage throughout the application.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::common::{PostId, CommentId, UserId};
//!
//! // These are incompatible types - compiler prevents mixing them up
//! let post_id: PostId = PostId::new();
//! let comment_id: CommentId = CommentId::new();
//!
//! // This would be a compile error:
//! // let wrong: CommentId = post_id;
//! ```

// Re-export the core Id type
pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for users. User rows live in the identity service; only
/// their ids appear here.
pub struct User;

/// Marker type for Post entities.
pub struct Post;

/// Marker type for Comment entities.
pub struct Comment;

/// Marker type for Reply entities (responses to a comment).
pub struct Reply;

/// Marker type for PostLike entities.
pub struct PostLike;

/// Marker type for CommentLike entities.
pub struct CommentLike;

/// Marker type for Hashtag entities.
pub struct Hashtag;

/// Marker type for PostView entities (one counted view per viewer).
pub struct PostView;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for users.
pub type UserId = Id<User>;

/// Typed ID for Post entities.
pub type PostId = Id<Post>;

/// Typed ID for Comment entities.
pub type CommentId = Id<Comment>;

/// Typed ID for Reply entities.
pub type ReplyId = Id<Reply>;

/// Typed ID for PostLike entities.
pub type PostLikeId = Id<PostLike>;

/// Typed ID for CommentLike entities.
pub type CommentLikeId = Id<CommentLike>;

/// Typed ID for Hashtag entities.
pub type HashtagId = Id<Hashtag>;

/// Typed ID for PostView entities.
pub type PostViewId = Id<PostView>;
