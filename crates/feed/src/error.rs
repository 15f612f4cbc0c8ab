#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// No preference record exists. Callers route the user to preference
    /// setup instead of showing a generic feed.
    #[error("no scoring preferences for user {user_id}")]
    MissingPreferences { user_id: String },

    #[error("{0}")]
    InvalidRequest(#[from] validator::ValidationErrors),

    #[error("{0}")]
    Store(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, FeedError>;
