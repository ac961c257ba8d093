//! In-memory post store for the active session.

use tracing::{debug, error, info};

use crate::application::repos::PostsRepo;
use crate::domain::entities::{Post, PostId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum StorePhase {
    #[default]
    Loading,
    Ready,
    /// The initial fetch failed. The store is empty but usable.
    Failed(String),
}

/// Authoritative list of posts for the session.
///
/// Filled once by [`PostStore::initialize`] and afterwards only changed
/// through [`PostStore::append`] and [`PostStore::remove`], after the remote
/// side has confirmed the change. Every change bumps [`PostStore::revision`].
#[derive(Debug, Default)]
pub struct PostStore {
    posts: Vec<Post>,
    phase: StorePhase,
    revision: u64,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that is already ready with the given posts.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts,
            phase: StorePhase::Ready,
            revision: 1,
        }
    }

    /// Load the collection from the remote side. Runs at most once; the
    /// store is ready afterwards whether or not the fetch succeeded.
    pub async fn initialize(&mut self, repo: &dyn PostsRepo) {
        if self.phase != StorePhase::Loading {
            debug!(phase = ?self.phase, "post store already initialized");
            return;
        }

        match repo.list_posts().await {
            Ok(posts) => {
                info!(count = posts.len(), "loaded posts");
                self.posts = posts;
                self.phase = StorePhase::Ready;
            }
            Err(err) => {
                error!(error = %err, "fetch error");
                self.posts.clear();
                self.phase = StorePhase::Failed(err.to_string());
            }
        }
        self.revision += 1;
    }

    pub fn append(&mut self, post: Post) {
        self.posts.push(post);
        self.revision += 1;
    }

    /// Drop the post with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: PostId) -> bool {
        let before = self.posts.len();
        self.posts.retain(|post| post.id != id);
        let removed = self.posts.len() != before;
        if removed {
            self.revision += 1;
        }
        removed
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    pub fn last_id(&self) -> Option<PostId> {
        self.posts.last().map(|post| post.id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn is_ready(&self) -> bool {
        !matches!(self.phase, StorePhase::Loading)
    }

    pub fn fetch_error(&self) -> Option<&str> {
        match &self.phase {
            StorePhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}
