//! HTTP requests and responses as plain data, plus the `Transport` seam.
//!
//! # Design
//! `AccountClient` builds `HttpRequest` values and parses `HttpResponse`
//! values; the `Transport` it is configured with executes the round trip in
//! between. Describing requests as plain owned data keeps the build/parse
//! halves deterministic and testable without a network, and lets callers
//! swap in their own transport (custom agent configuration, recording fakes
//! in tests).
//!
//! Timeouts, retries, and connection reuse are the transport's business;
//! nothing in this layer implements them.

use std::sync::Arc;

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// An HTTP request described as plain data.
///
/// `url` is absolute; query parameters are already encoded into it.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// The body has been read to completion by the transport, so the underlying
/// connection is released no matter how parsing goes.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Executes one synchronous HTTP round trip.
///
/// Implementations must return non-2xx responses as `Ok(HttpResponse)` —
/// status interpretation belongs to the client — and use
/// `ApiError::Transport` only for failures of the round trip itself.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}
