//! Domain DTOs for the account API.
//!
//! # Design
//! These types mirror the remote API's wire schema but are defined
//! independently from the mock-server crate; integration tests catch schema
//! drift. The API omits empty fields from JSON bodies, so every optional
//! attribute pairs `#[serde(default)]` with a `skip_serializing_if` guard.
//! There is one canonical `Account` shape — the legacy variants of this API
//! (title/first-name fields on the account, representative blocks) are gone
//! from current server responses and are not modelled.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single account record exchanged with the API.
///
/// `version` is assigned and incremented by the server; clients send the
/// value they last saw (deletes require the current version to match).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    pub organisation_id: Uuid,
    #[serde(rename = "type")]
    pub account_type: String,
    #[serde(default)]
    pub version: i64,
    #[serde(default)]
    pub attributes: AccountAttributes,
}

/// The account's attribute bag. All fields are optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_id_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternative_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_classification: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub joint_account: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub account_matching_opt_out: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_identification: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub switched: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_identification: Option<PrivateIdentification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organisation_identification: Option<OrganisationIdentification>,
}

/// Identification block for personal accounts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrivateIdentification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identification: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Identification block for organisation accounts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrganisationIdentification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identification: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actors: Vec<Actor>,
}

/// A person acting on behalf of an organisation account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Actor {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residency: Option<String>,
}

/// The `{"data": ...}` wrapper the API uses for every request and success
/// response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Envelope<T> {
    pub data: T,
}

/// The `{"error_message": ...}` body the API returns on failure statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error_message: String,
}
