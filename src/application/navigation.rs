//! Client-side routes and the navigator that tracks the current one.

use std::fmt;

use tracing::debug;

use crate::domain::entities::PostId;

/// The navigable views of the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`: the filtered post listing.
    Home,
    /// `/post`: the creation form.
    NewPost,
    /// `/post/{id}`: a single post.
    Post(PostId),
    /// `/about`
    About,
    /// Anything else.
    Missing(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        let segments: Vec<&str> = normalized
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["post"] => Route::NewPost,
            ["post", id] => id
                .parse()
                .map(Route::Post)
                .unwrap_or_else(|_| Route::Missing(trimmed.to_string())),
            ["about"] => Route::About,
            _ => Route::Missing(trimmed.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::NewPost => "/post".to_string(),
            Route::Post(id) => format!("/post/{id}"),
            Route::About => "/about".to_string(),
            Route::Missing(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    current: Route,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            current: Route::Home,
        }
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn navigate(&mut self, route: Route) {
        debug!(from = %self.current, to = %route, "navigate");
        self.current = route;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/post"), Route::NewPost);
        assert_eq!(Route::parse("/post/"), Route::NewPost);
        assert_eq!(Route::parse("/post/12"), Route::Post(PostId::new(12)));
        assert_eq!(Route::parse("/about"), Route::About);
    }

    #[test]
    fn everything_else_is_missing() {
        assert_eq!(
            Route::parse("/contact"),
            Route::Missing("/contact".to_string())
        );
        assert_eq!(
            Route::parse("/post/abc"),
            Route::Missing("/post/abc".to_string())
        );
        assert_eq!(
            Route::parse("/post/1/edit"),
            Route::Missing("/post/1/edit".to_string())
        );
    }

    #[test]
    fn paths_round_trip_through_parse() {
        for route in [
            Route::Home,
            Route::NewPost,
            Route::Post(PostId::new(3)),
            Route::About,
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn navigator_starts_on_listing() {
        let mut navigator = Navigator::new();
        assert_eq!(navigator.current(), &Route::Home);

        navigator.navigate(Route::About);
        assert_eq!(navigator.current(), &Route::About);
    }
}
