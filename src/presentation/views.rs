use askama::{Error as AskamaError, Template};
use thiserror::Error;

use crate::application::{navigation::Route, session::Session};
use crate::domain::entities::{Post, PostId};

const RULE_WIDTH: usize = 64;

#[derive(Debug, Error)]
#[error("failed to render the {view} view")]
pub struct TemplateRenderError {
    pub(crate) view: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(view: &'static str, error: AskamaError) -> Self {
        Self { view, error }
    }
}

pub fn render_template<T: Template>(
    view: &'static str,
    template: T,
) -> Result<String, TemplateRenderError> {
    template
        .render()
        .map_err(|err| TemplateRenderError::new(view, err))
}

/// Header, navigation bar, and footer shared by every view.
#[derive(Debug, Clone)]
pub struct ChromeView {
    pub title: String,
    pub search: String,
    pub year: i32,
    pub rule: String,
}

impl ChromeView {
    pub fn new(title: impl Into<String>, search: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            search: search.into(),
            year,
            rule: "=".repeat(RULE_WIDTH),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PostSummaryView {
    pub id: PostId,
    pub title: String,
    pub datetime: String,
    pub snippet: String,
}

impl From<&Post> for PostSummaryView {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            datetime: post.datetime.clone(),
            snippet: post.snippet(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PostDetailView {
    pub id: PostId,
    pub title: String,
    pub datetime: String,
    pub body: String,
}

impl From<&Post> for PostDetailView {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            datetime: post.datetime.clone(),
            body: post.body.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "home.txt", escape = "none")]
pub struct HomeTemplate {
    pub chrome: ChromeView,
    /// Shown instead of the listing while loading, after a failed fetch, or
    /// when nothing matches.
    pub status: Option<String>,
    pub posts: Vec<PostSummaryView>,
}

#[derive(Template)]
#[template(path = "post.txt", escape = "none")]
pub struct PostTemplate {
    pub chrome: ChromeView,
    pub post: Option<PostDetailView>,
}

#[derive(Template)]
#[template(path = "new_post.txt", escape = "none")]
pub struct NewPostTemplate {
    pub chrome: ChromeView,
    pub title: String,
    pub body: String,
}

#[derive(Template)]
#[template(path = "about.txt", escape = "none")]
pub struct AboutTemplate {
    pub chrome: ChromeView,
}

#[derive(Template)]
#[template(path = "missing.txt", escape = "none")]
pub struct MissingTemplate {
    pub chrome: ChromeView,
    pub path: String,
}

/// Render whatever route the session is currently on.
pub fn render_route(
    session: &mut Session,
    site_title: &str,
) -> Result<String, TemplateRenderError> {
    let chrome = ChromeView::new(
        site_title,
        session.search_term(),
        session.clock().now().year(),
    );

    match session.route().clone() {
        Route::Home => render_template("home", home_template(session, chrome)),
        Route::NewPost => {
            let draft = session.draft();
            render_template(
                "post form",
                NewPostTemplate {
                    chrome,
                    title: draft.title.clone(),
                    body: draft.body.clone(),
                },
            )
        }
        Route::Post(id) => render_template(
            "post",
            PostTemplate {
                chrome,
                post: session.post(id).map(PostDetailView::from),
            },
        ),
        Route::About => render_template("about", AboutTemplate { chrome }),
        Route::Missing(path) => render_template("not found", MissingTemplate { chrome, path }),
    }
}

fn home_template(session: &mut Session, chrome: ChromeView) -> HomeTemplate {
    let store = session.store();
    let status = if !store.is_ready() {
        Some("Loading posts...".to_string())
    } else {
        store
            .fetch_error()
            .map(|message| format!("Fetch error: {message}"))
    };
    if status.is_some() {
        return HomeTemplate {
            chrome,
            status,
            posts: Vec::new(),
        };
    }

    let posts: Vec<PostSummaryView> = session
        .search_results()
        .iter()
        .map(PostSummaryView::from)
        .collect();
    let status = posts.is_empty().then(|| "No posts to display.".to_string());

    HomeTemplate {
        chrome,
        status,
        posts,
    }
}
