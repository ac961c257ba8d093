use async_trait::async_trait;
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::application::repos::{PostsRepo, PostsWriteRepo, RepoError};
use crate::domain::entities::{Post, PostId};

/// `reqwest`-backed access to a JSON `posts` collection.
#[derive(Clone, Debug)]
pub struct HttpPostsRepo {
    client: Client,
    base: Url,
}

impl HttpPostsRepo {
    pub fn new(base: &Url) -> Result<Self, RepoError> {
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .build()
            .map_err(RepoError::from_transport)?;
        Ok(Self { client, base })
    }

    pub fn user_agent() -> &'static str {
        concat!("postboard/", env!("CARGO_PKG_VERSION"))
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn url(&self, path: &str) -> Result<Url, RepoError> {
        self.base
            .join(path)
            .map_err(|err| RepoError::Endpoint(err.to_string()))
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Post>,
    ) -> Result<Response, RepoError> {
        let url = self.url(path)?;
        debug!(%method, %url, "sending request");

        let mut req = self.client.request(method, url);
        if let Some(post) = body {
            req = req.json(post);
        }

        let resp = req.send().await.map_err(RepoError::from_transport)?;
        Self::ensure_success(resp).await
    }

    async fn ensure_success(resp: Response) -> Result<Response, RepoError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(RepoError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, RepoError> {
        let bytes = resp.bytes().await.map_err(RepoError::from_transport)?;
        serde_json::from_slice(&bytes).map_err(|err| RepoError::Decode(err.to_string()))
    }
}

#[async_trait]
impl PostsRepo for HttpPostsRepo {
    async fn list_posts(&self) -> Result<Vec<Post>, RepoError> {
        let resp = self.send(Method::GET, "posts", None).await?;
        Self::decode(resp).await
    }
}

#[async_trait]
impl PostsWriteRepo for HttpPostsRepo {
    async fn create_post(&self, post: &Post) -> Result<(), RepoError> {
        self.send(Method::POST, "posts", Some(post)).await?;
        Ok(())
    }

    async fn delete_post(&self, id: PostId) -> Result<(), RepoError> {
        let path = format!("posts/{id}");
        self.send(Method::DELETE, &path, None).await?;
        Ok(())
    }
}
