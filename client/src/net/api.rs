//! REST client wrapper for the Mentutor API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every non-2xx status is mapped to an [`ApiError`] variant so pages can
//! apply the shared 401 / 500 / other handling from `util::auth`. Nothing is
//! retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{ClassSummary, ListPayload, LoginRequest, LoginResponse, NewClass, NewMember};
use crate::config::ApiConfig;

pub const LOGIN_PATH: &str = "login";
pub const ADMIN_CLASSES_PATH: &str = "admin/classes";
pub const ADMIN_USERS_PATH: &str = "admin/users";

/// Failure of a single request/response round trip.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Token missing, invalid, or expired.
    #[error("unauthorized")]
    Unauthorized,
    #[error("server error: status 500")]
    Server,
    #[error("request failed: status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("response parse failed: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Map an HTTP status to an error; `None` for 2xx.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            401 => Some(Self::Unauthorized),
            500 => Some(Self::Server),
            other => Some(Self::Status(other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Whether a JSON body is sent with this method.
    pub fn carries_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

/// `Authorization` header value for a stored token, if there is one.
pub fn authorization_header(token: Option<&str>) -> Option<String> {
    token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| format!("Bearer {t}"))
}

/// Base URL plus the session token attached to every request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    config: ApiConfig,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, token: Option<String>) -> Self {
        Self { config, token }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    /// Issue one request and parse the JSON response into `T`.
    ///
    /// # Errors
    ///
    /// Returns the classified status error, a network error, or a decode
    /// error when the body does not match `T`.
    pub async fn request<B, T>(&self, method: HttpMethod, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let text = self.send(method, path, body).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Issue one request and discard the response body.
    ///
    /// # Errors
    ///
    /// Returns the classified status error or a network error.
    pub async fn request_unit<B>(&self, method: HttpMethod, path: &str, body: Option<&B>) -> Result<(), ApiError>
    where
        B: Serialize,
    {
        self.send(method, path, body).await.map(|_| ())
    }

    async fn send<B>(&self, method: HttpMethod, path: &str, body: Option<&B>) -> Result<String, ApiError>
    where
        B: Serialize,
    {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::{Request, RequestBuilder};

            let url = self.url(path);
            let mut builder: RequestBuilder = match method {
                HttpMethod::Get => Request::get(&url),
                HttpMethod::Post => Request::post(&url),
                HttpMethod::Put => Request::put(&url),
                HttpMethod::Delete => Request::delete(&url),
            };
            if let Some(auth) = authorization_header(self.token()) {
                builder = builder.header("Authorization", &auth);
            }
            let request = match body {
                Some(body) if method.carries_body() => {
                    builder.json(body).map_err(|e| ApiError::Network(e.to_string()))?
                }
                _ => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
            };
            let resp = request.send().await.map_err(|e| {
                log::warn!("{method:?} {url} failed: {e}");
                ApiError::Network(e.to_string())
            })?;
            if let Some(err) = ApiError::from_status(resp.status()) {
                log::warn!("{method:?} {url} answered {}", resp.status());
                return Err(err);
            }
            resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, path, body);
            Err(ApiError::Unavailable)
        }
    }
}

/// `POST /login`.
///
/// # Errors
///
/// Any [`ApiError`]; bad credentials surface as a status error.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
    client.request(HttpMethod::Post, LOGIN_PATH, Some(&body)).await
}

/// `GET /admin/classes`.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn fetch_classes(client: &ApiClient) -> Result<Vec<ClassSummary>, ApiError> {
    let payload: ListPayload<ClassSummary> = client.request::<(), _>(HttpMethod::Get, ADMIN_CLASSES_PATH, None).await?;
    Ok(payload.into_items())
}

/// `POST /admin/users`.
///
/// # Errors
///
/// Any [`ApiError`]; rejected input surfaces as a status error.
pub async fn create_member(client: &ApiClient, member: &NewMember) -> Result<(), ApiError> {
    client.request_unit(HttpMethod::Post, ADMIN_USERS_PATH, Some(member)).await
}

/// `POST /admin/classes`.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn create_class(client: &ApiClient, class: &NewClass) -> Result<(), ApiError> {
    client.request_unit(HttpMethod::Post, ADMIN_CLASSES_PATH, Some(class)).await
}
