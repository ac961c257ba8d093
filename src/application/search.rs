//! Search term and the filtered, newest-first view derived from the store.

use tracing::trace;

use crate::application::store::PostStore;
use crate::domain::{entities::Post, posts::filter_posts};

/// Filtered view over a [`PostStore`].
///
/// Results are recomputed in full whenever the term or the store revision
/// changed since the last read.
#[derive(Debug, Default)]
pub struct SearchView {
    term: String,
    results: Vec<Post>,
    computed: Option<(u64, String)>,
}

impl SearchView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    pub fn results(&mut self, store: &PostStore) -> &[Post] {
        let fresh = self
            .computed
            .as_ref()
            .is_some_and(|(revision, term)| *revision == store.revision() && *term == self.term);

        if !fresh {
            self.results = filter_posts(store.posts(), &self.term)
                .into_iter()
                .cloned()
                .collect();
            self.computed = Some((store.revision(), self.term.clone()));
            trace!(
                term = %self.term,
                matches = self.results.len(),
                revision = store.revision(),
                "recomputed search results"
            );
        }

        &self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::post;
    use crate::domain::entities::PostId;

    fn ids(posts: &[Post]) -> Vec<u64> {
        posts.iter().map(|post| post.id.get()).collect()
    }

    #[test]
    fn empty_term_shows_all_posts_newest_first() {
        let store = PostStore::with_posts(vec![
            post(1, "one", ""),
            post(2, "two", ""),
            post(3, "three", ""),
        ]);
        let mut view = SearchView::new();

        assert_eq!(ids(view.results(&store)), vec![3, 2, 1]);
    }

    #[test]
    fn term_change_triggers_recompute() {
        let store = PostStore::with_posts(vec![post(1, "Rust", ""), post(2, "Go", "")]);
        let mut view = SearchView::new();
        assert_eq!(view.results(&store).len(), 2);

        view.set_term("rUsT");

        assert_eq!(ids(view.results(&store)), vec![1]);
    }

    #[test]
    fn store_change_triggers_recompute() {
        let mut store = PostStore::with_posts(vec![post(1, "Rust", "")]);
        let mut view = SearchView::new();
        view.set_term("rust");
        assert_eq!(ids(view.results(&store)), vec![1]);

        store.append(post(2, "More rust", ""));
        assert_eq!(ids(view.results(&store)), vec![2, 1]);

        store.remove(PostId::new(1));
        assert_eq!(ids(view.results(&store)), vec![2]);
    }
}
