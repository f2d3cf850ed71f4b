use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("Http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },
}

#[async_trait]
pub trait LikeApi: Send + Sync {
    async fn like(&self, user_id: &str, post_id: &str) -> Result<(), ClientError>;
    async fn unlike(&self, user_id: &str, post_id: &str) -> Result<(), ClientError>;
    async fn like_count(&self, post_id: &str) -> Result<i64, ClientError>;
    async fn has_liked(&self, user_id: &str, post_id: &str) -> Result<bool, ClientError>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LikeBody<'a> {
    user_id: &'a str,
    post_id: &'a str,
}

#[derive(Deserialize)]
struct CountBody {
    count: i64,
}

#[derive(Deserialize)]
struct LikedBody {
    liked: bool,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// [`LikeApi`] over the service's JSON endpoints.
#[derive(Clone)]
pub struct HttpLikeApi {
    client: Client,
    base_url: Url,
}

impl HttpLikeApi {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { client, base_url })
    }

    // ids 作为独立路径段编码，避免 "/" 等字符改变路由
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("api").extend(segments);
        }
        url
    }

    async fn check(resp: Response) -> Result<Response, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = match resp.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
        };
        Err(ClientError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn post_pair(&self, action: &str, user_id: &str, post_id: &str) -> Result<(), ClientError> {
        let resp = self
            .client
            .post(self.endpoint(&[action]))
            .json(&LikeBody { user_id, post_id })
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }
}

#[async_trait]
impl LikeApi for HttpLikeApi {
    async fn like(&self, user_id: &str, post_id: &str) -> Result<(), ClientError> {
        self.post_pair("like", user_id, post_id).await
    }

    async fn unlike(&self, user_id: &str, post_id: &str) -> Result<(), ClientError> {
        self.post_pair("unlike", user_id, post_id).await
    }

    async fn like_count(&self, post_id: &str) -> Result<i64, ClientError> {
        let resp = self
            .client
            .get(self.endpoint(&["like-count", post_id]))
            .send()
            .await?;
        let body: CountBody = Self::check(resp).await?.json().await?;
        Ok(body.count)
    }

    async fn has_liked(&self, user_id: &str, post_id: &str) -> Result<bool, ClientError> {
        let resp = self
            .client
            .get(self.endpoint(&["has-liked", user_id, post_id]))
            .send()
            .await?;
        let body: LikedBody = Self::check(resp).await?.json().await?;
        Ok(body.liked)
    }
}
