//! Bundled `Transport` implementation over a `ureq::Agent`.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

/// Synchronous transport backed by a `ureq::Agent`.
///
/// The agent is built with `http_status_as_error(false)` so 4xx/5xx
/// responses come back as data rather than `Err`, leaving status
/// interpretation to `AccountClient`. `ureq::Agent` shares its connection
/// state internally, so one `UreqTransport` can serve many clients and
/// threads.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Wrap a caller-configured agent (timeouts, proxies, TLS choices).
    ///
    /// The agent must be configured with `http_status_as_error(false)`;
    /// otherwise non-2xx responses surface as `ApiError::Transport` instead
    /// of reaching the client's status handling.
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_headers<Any>(
    mut builder: ureq::RequestBuilder<Any>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<Any> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let result = match (&request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => {
                apply_headers(self.agent.get(&request.url), &request.headers).call()
            }
            (HttpMethod::Delete, _) => {
                apply_headers(self.agent.delete(&request.url), &request.headers).call()
            }
            (HttpMethod::Post, Some(body)) => {
                apply_headers(self.agent.post(&request.url), &request.headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => {
                apply_headers(self.agent.post(&request.url), &request.headers).send_empty()
            }
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        // Read the body even when we will not parse it, so the connection
        // is released back to the agent.
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}
