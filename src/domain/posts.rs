use time::{OffsetDateTime, format_description::FormatItem, macros::format_description};

use crate::domain::{
    entities::{Post, PostId},
    error::DomainError,
};

/// Display timestamp attached to new posts, e.g. `October 19, 2026 3:04:05 PM`.
pub const DISPLAY_TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!(
    "[month repr:long] [day], [year] [hour repr:12 padding:none]:[minute]:[second] [period]"
);

/// Posts whose title or body contains `term` (case-insensitive), newest first.
///
/// An empty term matches every post.
pub fn filter_posts<'a>(posts: &'a [Post], term: &str) -> Vec<&'a Post> {
    let needle = term.to_lowercase();
    posts
        .iter()
        .filter(|post| post.matches_lowercase(&needle))
        .rev()
        .collect()
}

/// Identifier for the next post: the last post's id plus one, or 1 for an
/// empty list.
///
/// Assigned client-side. Two clients creating posts against the same
/// collection at the same time can pick the same id.
pub fn next_post_id(posts: &[Post]) -> Result<PostId, DomainError> {
    match posts.last() {
        Some(last) => last.id.next(),
        None => Ok(PostId::FIRST),
    }
}

pub fn format_display_timestamp(at: OffsetDateTime) -> Result<String, DomainError> {
    at.format(DISPLAY_TIMESTAMP_FORMAT)
        .map_err(|err| DomainError::invariant(format!("failed to format timestamp: {err}")))
}
