//! REST client for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: the browser transport answers with a
//! network error, and tests substitute their own [`Transport`].
//!
//! CREDENTIALS
//! ===========
//! There is no process-wide default header. Every call takes the bearer
//! token explicitly and attaches `Authorization: Bearer <token>` to that one
//! request only.
//!
//! ERROR HANDLING
//! ==============
//! Callers get [`ApiError`] values instead of panics. Non-2xx responses keep
//! the decoded `message` field when the backend sent one.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{AuthResponse, ErrorBody, ErrorMessage, LoginCredentials, RegisterFields};
use crate::util::config::join_url;

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const CURRENT_USER_PATH: &str = "/user/me";

/// Errors produced by API calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Http { status: u16, message: Option<ErrorMessage> },

    /// A success response body could not be decoded.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The request body could not be encoded.
    #[error("request encode failed: {0}")]
    Serialization(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One outbound HTTP request, fully resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub authorization: Option<String>,
    pub body: Option<String>,
}

/// Raw HTTP response handed back by a [`Transport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Black-box request/response transport.
///
/// Implementations only move bytes; status interpretation and JSON decoding
/// live in [`ApiClient`].
pub trait Transport {
    /// Send one request. Errors are reserved for failures that produced no response.
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// Browser `fetch` transport backed by `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
            };
            if let Some(authorization) = request.authorization.as_deref() {
                builder = builder.header("Authorization", authorization);
            }
            let outbound = match request.body {
                Some(body) => builder
                    .header("Content-Type", "application/json")
                    .body(body)
                    .map_err(|e| ApiError::Serialization(e.to_string()))?,
                None => builder.build().map_err(|e| ApiError::Serialization(e.to_string()))?,
            };
            let resp = outbound
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }
}

/// Format a bearer token as an `Authorization` header value.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// The client as provided to components.
pub type AppApi = ApiClient<GlooTransport>;

/// Typed client for the auth endpoints.
#[derive(Clone, Debug)]
pub struct ApiClient<T = GlooTransport> {
    base_url: String,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self { base_url: base_url.into(), transport }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails or the backend rejects it.
    pub async fn login(&self, credentials: &LoginCredentials, bearer: Option<&str>) -> Result<AuthResponse, ApiError> {
        self.post_json(LOGIN_PATH, credentials, bearer).await
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails or the backend rejects it.
    pub async fn register(&self, fields: &RegisterFields, bearer: Option<&str>) -> Result<AuthResponse, ApiError> {
        self.post_json(REGISTER_PATH, fields, bearer).await
    }

    /// `GET /user/me` using the supplied bearer token.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails or the token is rejected.
    pub async fn current_user(&self, bearer: Option<&str>) -> Result<AuthResponse, ApiError> {
        self.get_json(CURRENT_USER_PATH, bearer).await
    }

    async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> Result<R, ApiError> {
        let payload = serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let request = ApiRequest {
            method: Method::Post,
            url: join_url(&self.base_url, path),
            authorization: bearer.map(bearer_header),
            body: Some(payload),
        };
        decode_response(self.transport.send(request).await?)
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str, bearer: Option<&str>) -> Result<R, ApiError> {
        let request = ApiRequest {
            method: Method::Get,
            url: join_url(&self.base_url, path),
            authorization: bearer.map(bearer_header),
            body: None,
        };
        decode_response(self.transport.send(request).await?)
    }
}

/// Decode a success body, or turn a failure status into [`ApiError::Http`].
fn decode_response<R: DeserializeOwned>(response: ApiResponse) -> Result<R, ApiError> {
    if response.is_success() {
        return serde_json::from_str(&response.body).map_err(|e| ApiError::Parse(e.to_string()));
    }
    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.message);
    Err(ApiError::Http { status: response.status, message })
}
