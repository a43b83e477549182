use thiserror::Error;

/// Result type for discussion operations.
pub type Result<T> = std::result::Result<T, DiscussionError>;

/// Errors surfaced by the discussion engine
#[derive(Error, Debug)]
pub enum DiscussionError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Not authorized to modify this {0}")]
    Unauthorized(&'static str),

    #[error("{0} already exists")]
    AlreadyExists(&'static str),

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Dependency unavailable: {0}")]
    DependencyUnavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl DiscussionError {
    /// Wrap an external-service failure, preserving its message.
    ///
    /// Identity and media failures must never degrade into partial
    /// results; callers convert them with this and propagate.
    pub fn dependency(err: impl std::fmt::Display) -> Self {
        DiscussionError::DependencyUnavailable(err.to_string())
    }
}
