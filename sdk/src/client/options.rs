//! Per-call request descriptor.

use reqwest::Method;
use serde::Serialize;

use super::error::ClientError;

/// Method, header overrides and body for one call to
/// [`MatEduClient::request`](super::MatEduClient::request).
///
/// Headers listed here are applied on top of the default
/// `Content-Type: application/json`; the bearer token, when present, is
/// applied last.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method. Defaults to `GET`.
    pub method: Method,

    /// Header overrides, applied in order.
    pub headers: Vec<(String, String)>,

    /// Pre-serialized body.
    pub body: Option<String>,
}

impl RequestOptions {
    /// A `GET` with no body.
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    /// A `POST` with no body.
    #[must_use]
    pub fn post() -> Self {
        Self::default().with_method(Method::POST)
    }

    /// Sets the method.
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Adds a header override.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets a pre-serialized body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes `payload` as JSON and uses it as the body.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub fn with_json<B: Serialize + ?Sized>(self, payload: &B) -> Result<Self, ClientError> {
        let body =
            serde_json::to_string(payload).map_err(|e| ClientError::Serialization(e.to_string()))?;
        Ok(self.with_body(body))
    }
}
