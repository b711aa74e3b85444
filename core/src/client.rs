//! HTTP request builder, executor, and response parser for the account API.
//!
//! # Design
//! `AccountClient` holds a validated base URL and a `Transport` handle and
//! carries no mutable state between calls. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`, composed by the public `create`,
//! `fetch`, `delete`, and `list` methods — one round trip each. The split
//! halves stay public so the building and parsing logic can be exercised
//! without a network.
//!
//! Every parse method checks the status code before decoding. An earlier
//! revision of this client decoded fetch responses unconditionally, which
//! turned server errors into confusing deserialization failures; the strict
//! order is deliberate.

use serde::de::DeserializeOwned;
use url::Url;
use uuid::Uuid;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::types::{Account, Envelope, ErrorEnvelope};

/// Resource path for the accounts collection, relative to the host.
const ACCOUNTS_PATH: &str = "/v1/organisation/accounts/";

/// Synchronous client for the account API.
///
/// Cheap to clone when the transport is; sharing one transport handle
/// (for example an `Arc<UreqTransport>`) across clients is supported.
#[derive(Debug, Clone)]
pub struct AccountClient<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> AccountClient<T> {
    /// Build a client for the API at `host`.
    ///
    /// Fails fast with `ApiError::InvalidHost` unless `host` is an absolute
    /// URI with an authority, e.g. `http://localhost:8080`. A trailing
    /// slash is normalized away.
    pub fn new(transport: T, host: &str) -> Result<Self, ApiError> {
        let parsed = Url::parse(host).map_err(|e| ApiError::InvalidHost(format!("{host}: {e}")))?;
        if !parsed.has_host() {
            return Err(ApiError::InvalidHost(format!("{host}: no host component")));
        }
        Ok(Self {
            base_url: host.trim_end_matches('/').to_string(),
            transport,
        })
    }

    /// Register `account` with the server.
    ///
    /// Returns the stored record, whose `version` is server-assigned.
    pub fn create(&self, account: &Account) -> Result<Account, ApiError> {
        let request = self.build_create(account)?;
        let response = self.transport.execute(&request)?;
        log::debug!("create account {} -> HTTP {}", account.id, response.status);
        self.parse_create(response)
    }

    /// Retrieve the account with `account_id`.
    pub fn fetch(&self, account_id: Uuid) -> Result<Account, ApiError> {
        let request = self.build_fetch(account_id);
        let response = self.transport.execute(&request)?;
        log::debug!("fetch account {account_id} -> HTTP {}", response.status);
        self.parse_fetch(response)
    }

    /// Delete the account with `account_id`, which must currently be at
    /// `version`.
    pub fn delete(&self, account_id: Uuid, version: i64) -> Result<(), ApiError> {
        let request = self.build_delete(account_id, version);
        let response = self.transport.execute(&request)?;
        log::debug!("delete account {account_id} v{version} -> HTTP {}", response.status);
        self.parse_delete(response)
    }

    /// Retrieve all accounts.
    pub fn list(&self) -> Result<Vec<Account>, ApiError> {
        let request = self.build_list();
        let response = self.transport.execute(&request)?;
        log::debug!("list accounts -> HTTP {}", response.status);
        self.parse_list(response)
    }

    pub fn build_create(&self, account: &Account) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(&Envelope { data: account })
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{ACCOUNTS_PATH}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_fetch(&self, account_id: Uuid) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{ACCOUNTS_PATH}{account_id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_delete(&self, account_id: Uuid, version: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}{ACCOUNTS_PATH}{account_id}?version={version}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{ACCOUNTS_PATH}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Account, ApiError> {
        check_status(&response, 201)?;
        decode_data(&response.body)
    }

    pub fn parse_fetch(&self, response: HttpResponse) -> Result<Account, ApiError> {
        check_status(&response, 200)?;
        decode_data(&response.body)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Account>, ApiError> {
        check_status(&response, 200)?;
        decode_data(&response.body)
    }
}

/// Map an unexpected status to the appropriate `ApiError` variant.
///
/// 404 becomes `NotFound`; anything else becomes `Api` carrying the decoded
/// `error_message`, falling back to the raw body when the error envelope
/// does not parse or is empty.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    let message = match serde_json::from_str::<ErrorEnvelope>(&response.body) {
        Ok(envelope) if !envelope.error_message.is_empty() => envelope.error_message,
        _ => response.body.clone(),
    };
    Err(ApiError::Api {
        status: response.status,
        message,
    })
}

/// Unwrap the `{"data": ...}` envelope of a success body.
fn decode_data<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let envelope: Envelope<T> =
        serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
    Ok(envelope.data)
}
