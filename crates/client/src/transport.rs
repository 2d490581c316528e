//! HTTP transports.
//!
//! [`HttpClient`] is the only seam between the sync logic and the network:
//! [`ReqwestClient`] talks to a running server, [`LoopbackClient`] dispatches
//! straight into an in-process axum [`Router`].

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use reqwest::Url;
use tower::ServiceExt;

use crate::error::{ClientError, ClientResult};

/// One outgoing request; `body` is sent as JSON when present.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn send(&self, request: ApiRequest) -> ClientResult<RawResponse>;
}

/// Network transport backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: ApiRequest) -> ClientResult<RawResponse> {
        let mut builder = self.client.request(request.method, request.url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok(RawResponse { status, body })
    }
}

/// Routes requests into an axum router without a socket. Only the path and
/// query of the request URL are used.
#[derive(Clone)]
pub struct LoopbackClient {
    router: Router,
}

impl LoopbackClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }
}

#[async_trait]
impl HttpClient for LoopbackClient {
    async fn send(&self, request: ApiRequest) -> ClientResult<RawResponse> {
        let mut uri = request.url.path().to_string();
        if let Some(query) = request.url.query() {
            uri.push('?');
            uri.push_str(query);
        }

        let builder = Request::builder().method(request.method).uri(uri);
        let http_request = match &request.body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(body)?)),
            None => builder.body(Body::empty()),
        }
        .map_err(|err| ClientError::Transport(err.to_string()))?;

        let response = match self.router.clone().oneshot(http_request).await {
            Ok(response) => response,
            Err(never) => match never {},
        };

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|err| ClientError::Transport(err.to_string()))?;

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}
