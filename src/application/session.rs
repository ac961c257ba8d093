//! The client session: store, search view, creation draft, and navigator,
//! wired to one remote collection.

use std::sync::Arc;

use crate::application::{
    clock::Clock,
    gateway::{MutationGateway, MutationOutcome, PostDraft},
    navigation::{Navigator, Route},
    repos::{PostsRepo, PostsWriteRepo},
    search::SearchView,
    store::PostStore,
};
use crate::domain::entities::{Post, PostId};

pub struct Session {
    reader: Arc<dyn PostsRepo>,
    clock: Arc<dyn Clock>,
    gateway: MutationGateway,
    store: PostStore,
    search: SearchView,
    draft: PostDraft,
    navigator: Navigator,
}

impl Session {
    /// An uninitialized session. Call [`Session::initialize`] before reading
    /// any view, or use [`Session::start`].
    pub fn new(
        reader: Arc<dyn PostsRepo>,
        writer: Arc<dyn PostsWriteRepo>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let gateway = MutationGateway::new(writer, clock.clone());
        Self {
            reader,
            clock,
            gateway,
            store: PostStore::new(),
            search: SearchView::new(),
            draft: PostDraft::default(),
            navigator: Navigator::new(),
        }
    }

    /// Build a session and wait for the initial fetch to finish.
    pub async fn start(
        reader: Arc<dyn PostsRepo>,
        writer: Arc<dyn PostsWriteRepo>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let mut session = Self::new(reader, writer, clock);
        session.initialize().await;
        session
    }

    pub async fn initialize(&mut self) {
        self.store.initialize(self.reader.as_ref()).await;
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn search_term(&self) -> &str {
        self.search.term()
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search.set_term(term);
    }

    /// Posts matching the current search term, newest first.
    pub fn search_results(&mut self) -> &[Post] {
        self.search.results(&self.store)
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.store.get(id)
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.draft.body = body.into();
    }

    pub fn route(&self) -> &Route {
        self.navigator.current()
    }

    pub fn navigate(&mut self, route: Route) {
        self.navigator.navigate(route);
    }

    /// Submit the current draft.
    pub async fn submit(&mut self) -> MutationOutcome<Post> {
        self.gateway
            .create(&mut self.store, &mut self.draft, &mut self.navigator)
            .await
    }

    pub async fn delete(&mut self, id: PostId) -> MutationOutcome<PostId> {
        self.gateway
            .delete(id, &mut self.store, &mut self.navigator)
            .await
    }
}
