//! In-memory posts collection shared by the application tests.

use std::sync::{
    Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::application::repos::{PostsRepo, PostsWriteRepo, RepoError};
use crate::domain::entities::{Post, PostId};

pub fn post(id: u64, title: &str, body: &str) -> Post {
    Post {
        id: PostId::new(id),
        title: title.to_string(),
        datetime: "July 16, 2021 11:17:36 AM".to_string(),
        body: body.to_string(),
    }
}

fn unavailable() -> RepoError {
    RepoError::Status {
        status: 503,
        body: "unavailable".to_string(),
    }
}

#[derive(Default)]
pub struct InMemoryPosts {
    posts: Mutex<Vec<Post>>,
    created: Mutex<Vec<Post>>,
    deleted: Mutex<Vec<PostId>>,
    list_calls: AtomicUsize,
    fail_list: AtomicBool,
    fail_create: AtomicBool,
    fail_delete: AtomicBool,
}

impl InMemoryPosts {
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: Mutex::new(posts),
            ..Self::default()
        }
    }

    pub fn fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    pub fn fail_delete(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn created(&self) -> Vec<Post> {
        self.created.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<PostId> {
        self.deleted.lock().unwrap().clone()
    }
}

/// Writer that holds every request open until [`GatedWriter::release`].
#[derive(Default)]
pub struct GatedWriter {
    entered: Notify,
    release: Notify,
}

impl GatedWriter {
    /// Resolves once a request has reached the writer.
    pub async fn entered(&self) {
        self.entered.notified().await;
    }

    pub fn release(&self) {
        self.release.notify_one();
    }

    async fn hold(&self) {
        self.entered.notify_one();
        self.release.notified().await;
    }
}

#[async_trait]
impl PostsWriteRepo for GatedWriter {
    async fn create_post(&self, _post: &Post) -> Result<(), RepoError> {
        self.hold().await;
        Ok(())
    }

    async fn delete_post(&self, _id: PostId) -> Result<(), RepoError> {
        self.hold().await;
        Ok(())
    }
}

#[async_trait]
impl PostsRepo for InMemoryPosts {
    async fn list_posts(&self) -> Result<Vec<Post>, RepoError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        Ok(self.posts.lock().unwrap().clone())
    }
}

#[async_trait]
impl PostsWriteRepo for InMemoryPosts {
    async fn create_post(&self, post: &Post) -> Result<(), RepoError> {
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        self.posts.lock().unwrap().push(post.clone());
        self.created.lock().unwrap().push(post.clone());
        Ok(())
    }

    async fn delete_post(&self, id: PostId) -> Result<(), RepoError> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        self.posts.lock().unwrap().retain(|post| post.id != id);
        self.deleted.lock().unwrap().push(id);
        Ok(())
    }
}
