//! Repository traits describing the remote posts collection.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{Post, PostId};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("invalid endpoint: {0}")]
    Endpoint(String),
}

impl RepoError {
    pub fn from_transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }
}

#[async_trait]
pub trait PostsRepo: Send + Sync {
    /// The whole collection, in server order.
    async fn list_posts(&self) -> Result<Vec<Post>, RepoError>;
}

#[async_trait]
pub trait PostsWriteRepo: Send + Sync {
    async fn create_post(&self, post: &Post) -> Result<(), RepoError>;

    async fn delete_post(&self, id: PostId) -> Result<(), RepoError>;
}
