//! Create/delete requests against the remote collection, reconciled into the
//! local store only after the remote side confirms them.
//!
//! Each mutation moves through `Idle -> InFlight -> Committed | Failed` and
//! back to idle. A failure is logged and reported through
//! [`MutationOutcome::Failed`]; it never leaves local state half-changed.

use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use thiserror::Error;
use tracing::{debug, error, info};

use crate::application::{
    clock::Clock,
    navigation::{Navigator, Route},
    repos::{PostsWriteRepo, RepoError},
    store::PostStore,
};
use crate::domain::{
    entities::{Post, PostId},
    error::DomainError,
    posts::{format_display_timestamp, next_post_id},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationState {
    Idle,
    InFlight,
    Committed,
    Failed,
}

impl MutationState {
    pub fn as_str(self) -> &'static str {
        match self {
            MutationState::Idle => "idle",
            MutationState::InFlight => "in_flight",
            MutationState::Committed => "committed",
            MutationState::Failed => "failed",
        }
    }
}

impl fmt::Display for MutationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum MutationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

#[derive(Debug)]
pub enum MutationOutcome<T> {
    Committed(T),
    Failed(MutationError),
}

impl<T> MutationOutcome<T> {
    pub fn state(&self) -> MutationState {
        match self {
            MutationOutcome::Committed(_) => MutationState::Committed,
            MutationOutcome::Failed(_) => MutationState::Failed,
        }
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, MutationOutcome::Committed(_))
    }

    pub fn error(&self) -> Option<&MutationError> {
        match self {
            MutationOutcome::Failed(err) => Some(err),
            MutationOutcome::Committed(_) => None,
        }
    }
}

/// Creation form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.body.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.body.is_empty()
    }
}

struct InFlight<'a> {
    counter: &'a AtomicUsize,
}

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self { counter }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::SeqCst);
    }
}

pub struct MutationGateway {
    writer: Arc<dyn PostsWriteRepo>,
    clock: Arc<dyn Clock>,
    in_flight: AtomicUsize,
}

impl MutationGateway {
    pub fn new(writer: Arc<dyn PostsWriteRepo>, clock: Arc<dyn Clock>) -> Self {
        Self {
            writer,
            clock,
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Number of mutations currently waiting on the remote side.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn state(&self) -> MutationState {
        if self.in_flight() > 0 {
            MutationState::InFlight
        } else {
            MutationState::Idle
        }
    }

    /// Build the post for `draft` with the next identifier and the current
    /// display timestamp. Title and body are taken as-is.
    pub fn prepare(&self, store: &PostStore, draft: &PostDraft) -> Result<Post, DomainError> {
        Ok(Post {
            id: next_post_id(store.posts())?,
            title: draft.title.clone(),
            datetime: format_display_timestamp(self.clock.now())?,
            body: draft.body.clone(),
        })
    }

    /// Submit `draft` as a new post.
    ///
    /// On success the post is appended, the draft cleared, and the navigator
    /// sent to the listing. On failure nothing changes.
    pub async fn create(
        &self,
        store: &mut PostStore,
        draft: &mut PostDraft,
        navigator: &mut Navigator,
    ) -> MutationOutcome<Post> {
        let post = match self.prepare(store, draft) {
            Ok(post) => post,
            Err(err) => {
                error!(error = %err, state = %MutationState::Failed, "submit error");
                return MutationOutcome::Failed(err.into());
            }
        };

        let result = {
            let _in_flight = InFlight::enter(&self.in_flight);
            debug!(id = %post.id, state = %MutationState::InFlight, "creating post");
            self.writer.create_post(&post).await
        };

        match result {
            Ok(()) => {
                store.append(post.clone());
                draft.clear();
                navigator.navigate(Route::Home);
                info!(id = %post.id, state = %MutationState::Committed, "post created");
                MutationOutcome::Committed(post)
            }
            Err(err) => {
                error!(id = %post.id, error = %err, state = %MutationState::Failed, "submit error");
                MutationOutcome::Failed(err.into())
            }
        }
    }

    /// Delete the post with `id` remotely, then locally.
    pub async fn delete(
        &self,
        id: PostId,
        store: &mut PostStore,
        navigator: &mut Navigator,
    ) -> MutationOutcome<PostId> {
        let result = {
            let _in_flight = InFlight::enter(&self.in_flight);
            debug!(%id, state = %MutationState::InFlight, "deleting post");
            self.writer.delete_post(id).await
        };

        match result {
            Ok(()) => {
                if !store.remove(id) {
                    debug!(%id, "deleted post was not in the local store");
                }
                navigator.navigate(Route::Home);
                info!(%id, state = %MutationState::Committed, "post deleted");
                MutationOutcome::Committed(id)
            }
            Err(err) => {
                error!(%id, error = %err, state = %MutationState::Failed, "delete error");
                MutationOutcome::Failed(err.into())
            }
        }
    }
}
