//! HTTP transport for the storefront REST API
//!
//! The bearer token is passed per call rather than stored in the client, so
//! every authenticated operation shows which token it uses.

use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Raw status and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    pub status: StatusCode,
    pub body: String,
}

impl ApiReply {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Turn any non-2xx status into [`ClientError::Status`]
    pub fn error_for_status(self) -> ClientResult<Self> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(ClientError::Status {
                status: self.status,
                body: self.body,
            })
        }
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// HTTP client trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, path: &str, token: Option<&str>) -> ClientResult<ApiReply>;
    async fn post<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> ClientResult<ApiReply>;
    fn base_url(&self) -> &str;
}

/// reqwest-backed HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(req: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(t) => req.bearer_auth(t),
            None => req,
        }
    }

    async fn send(req: RequestBuilder) -> ClientResult<ApiReply> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(ApiReply { status, body })
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get(&self, path: &str, token: Option<&str>) -> ClientResult<ApiReply> {
        let req = Self::authorize(self.client.get(self.url(path)), token);
        let reply = Self::send(req).await?;
        debug!(method = "GET", path, status = %reply.status, "Request completed");
        Ok(reply)
    }

    async fn post<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> ClientResult<ApiReply> {
        let req = Self::authorize(self.client.post(self.url(path)).json(body), token);
        let reply = Self::send(req).await?;
        debug!(method = "POST", path, status = %reply.status, "Request completed");
        Ok(reply)
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
