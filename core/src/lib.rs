//! Synchronous client for the organisation accounts REST API.
//!
//! # Overview
//! `AccountClient` holds a validated base host URL and a `Transport` handle
//! and exposes four operations — `create`, `fetch`, `delete`, `list` — that
//! each build one request, perform one HTTP round trip, and decode the
//! response. Request and success bodies use the API's `{"data": ...}`
//! envelope; failure statuses carry `{"error_message": ...}`.
//!
//! # Design
//! - Each operation is split into `build_*` (produces an `HttpRequest`) and
//!   `parse_*` (consumes an `HttpResponse`), so the mapping layer can be
//!   tested without a network.
//! - The network round trip happens behind the `Transport` trait;
//!   `UreqTransport` is the bundled implementation. One transport handle is
//!   expected to be shared across clients and threads.
//! - Every parse checks the status code before decoding, so a server
//!   rejection is never reported as a deserialization failure.
//! - No retries, timeouts, or caching in this layer; such policy belongs to
//!   the transport the client is configured with.

pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::AccountClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use transport::UreqTransport;
pub use types::{
    Account, AccountAttributes, Actor, Envelope, ErrorEnvelope, OrganisationIdentification,
    PrivateIdentification,
};
