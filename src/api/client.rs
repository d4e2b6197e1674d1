//! Generic single-shot HTTP request construction and dispatch.
//!
//! `RequestSpec` parameterizes method, authentication scheme, content type,
//! and body; `ApiClient` performs exactly one call and returns the raw
//! response body. The structured and template exchange variants are both
//! built on top of this layer.

use crate::error::ApiError;
use reqwest::Method;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// How the credential is attached to an outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthScheme {
    /// No credential.
    None,
    /// `Authorization: Bearer <token>` header.
    Bearer(String),
    /// `X-API-Key: <key>` header.
    ApiKeyHeader(String),
    /// `?key=<key>` query parameter appended to the URL.
    QueryKey(String),
}

/// A fully described outbound request.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub url: String,
    pub method: Method,
    pub auth: AuthScheme,
    pub content_type: Option<String>,
    pub body: Option<String>,
}

impl RequestSpec {
    /// A bare GET with no body and no credential.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::GET,
            auth: AuthScheme::None,
            content_type: None,
            body: None,
        }
    }

    /// A JSON POST whose body is the serialized `payload`.
    pub fn post_json<T: Serialize>(url: impl Into<String>, payload: &T) -> Result<Self, ApiError> {
        Ok(Self {
            url: url.into(),
            method: Method::POST,
            auth: AuthScheme::None,
            content_type: Some("application/json".to_string()),
            body: Some(serde_json::to_string(payload)?),
        })
    }

    /// Attach a credential scheme to this request.
    pub fn with_auth(mut self, auth: AuthScheme) -> Self {
        self.auth = auth;
        self
    }

    /// Final URL for dispatch, with query-parameter credentials applied.
    ///
    /// Header-based schemes leave the URL untouched; logging uses `self.url`
    /// so the credential never reaches the log stream.
    fn request_url(&self) -> String {
        match &self.auth {
            AuthScheme::QueryKey(key) => {
                let sep = if self.url.contains('?') { '&' } else { '?' };
                format!("{}{sep}key={}", self.url, urlencoding::encode(key))
            }
            _ => self.url.clone(),
        }
    }
}

/// Client that performs one blocking exchange per call.
pub struct ApiClient {
    http: reqwest::Client,
}

impl ApiClient {
    /// Build a client with the given request timeout.
    pub fn new(timeout: Duration) -> Self {
        // Fall back to reqwest defaults if builder creation fails for any reason.
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { http }
    }

    /// Send one request and return the raw response body.
    ///
    /// Non-2xx responses surface as [`ApiError::Status`] carrying the status
    /// code and whatever body the endpoint returned.
    pub async fn execute(&self, spec: &RequestSpec) -> Result<String, ApiError> {
        debug!(method = %spec.method, url = %spec.url, "dispatching request");

        let mut req = self.http.request(spec.method.clone(), spec.request_url());
        match &spec.auth {
            AuthScheme::Bearer(token) => {
                req = req.header("Authorization", format!("Bearer {token}"));
            }
            AuthScheme::ApiKeyHeader(key) => {
                req = req.header("X-API-Key", key.clone());
            }
            AuthScheme::None | AuthScheme::QueryKey(_) => {}
        }
        if let Some(content_type) = &spec.content_type {
            req = req.header("Content-Type", content_type.clone());
        }
        if let Some(body) = &spec.body {
            req = req.body(body.clone());
        }

        let response = req.send().await?;
        if !response.status().is_success() {
            let code = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { code, body });
        }

        response.text().await.map_err(ApiError::from)
    }
}
