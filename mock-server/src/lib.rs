//! In-memory double of the organisation accounts API for tests.
//!
//! Mirrors the remote API's observable behavior: `{"data": ...}` envelopes
//! on success, `{"error_message": ...}` on failure, server-assigned
//! versions, duplicate-id rejection on create, and version-checked delete.
//! Account types here are defined independently of the client crate —
//! `attributes` stays an opaque JSON value because the server echoes it
//! without interpretation — so integration tests catch schema drift.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub organisation_id: Uuid,
    #[serde(rename = "type")]
    pub account_type: String,
    #[serde(default)]
    pub version: i64,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub attributes: Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error_message: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    #[serde(default)]
    pub version: i64,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Account>>>;

type ErrorResponse = (StatusCode, Json<ErrorBody>);

fn error(status: StatusCode, message: impl Into<String>) -> ErrorResponse {
    (
        status,
        Json(ErrorBody {
            error_message: message.into(),
        }),
    )
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route(
            "/v1/organisation/accounts/",
            get(list_accounts).post(create_account),
        )
        .route(
            "/v1/organisation/accounts/{id}",
            get(fetch_account).delete(delete_account),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_accounts(State(db): State<Db>) -> Json<Envelope<Vec<Account>>> {
    let accounts = db.read().await;
    Json(Envelope {
        data: accounts.values().cloned().collect(),
    })
}

async fn create_account(
    State(db): State<Db>,
    Json(envelope): Json<Envelope<Account>>,
) -> Result<(StatusCode, Json<Envelope<Account>>), ErrorResponse> {
    let mut accounts = db.write().await;
    if accounts.contains_key(&envelope.data.id) {
        return Err(error(
            StatusCode::CONFLICT,
            "Account cannot be created as it violates a duplicate constraint",
        ));
    }
    // The server owns the version counter; whatever the client sent is
    // ignored.
    let account = Account {
        version: 0,
        ..envelope.data
    };
    accounts.insert(account.id, account.clone());
    Ok((StatusCode::CREATED, Json(Envelope { data: account })))
}

async fn fetch_account(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<Account>>, ErrorResponse> {
    let accounts = db.read().await;
    accounts
        .get(&id)
        .cloned()
        .map(|account| Json(Envelope { data: account }))
        .ok_or_else(|| error(StatusCode::NOT_FOUND, format!("record {id} does not exist")))
}

async fn delete_account(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Query(params): Query<DeleteParams>,
) -> Result<StatusCode, ErrorResponse> {
    let mut accounts = db.write().await;
    let account = accounts
        .get(&id)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, format!("record {id} does not exist")))?;
    if account.version != params.version {
        return Err(error(StatusCode::CONFLICT, "invalid version"));
    }
    accounts.remove(&id);
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account {
            id: Uuid::nil(),
            organisation_id: Uuid::nil(),
            account_type: "accounts".to_string(),
            version: 0,
            attributes: serde_json::json!({"country": "GB"}),
        }
    }

    #[test]
    fn account_serializes_with_type_field() {
        let json = serde_json::to_value(account()).unwrap();
        assert_eq!(json["type"], "accounts");
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["attributes"]["country"], "GB");
    }

    #[test]
    fn null_attributes_are_omitted() {
        let mut account = account();
        account.attributes = Value::Null;
        let json = serde_json::to_value(account).unwrap();
        assert!(json.get("attributes").is_none());
    }

    #[test]
    fn envelope_wraps_data() {
        let json = serde_json::to_value(Envelope { data: account() }).unwrap();
        assert_eq!(json["data"]["type"], "accounts");
    }

    #[test]
    fn account_tolerates_missing_version_and_attributes() {
        let raw = r#"{
            "id": "00000000-0000-0000-0000-000000000001",
            "organisation_id": "00000000-0000-0000-0000-000000000002",
            "type": "accounts"
        }"#;
        let account: Account = serde_json::from_str(raw).unwrap();
        assert_eq!(account.version, 0);
        assert!(account.attributes.is_null());
    }

    #[test]
    fn delete_params_default_version() {
        let params: DeleteParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.version, 0);
    }

    #[test]
    fn error_body_shape() {
        let json = serde_json::to_value(ErrorBody {
            error_message: "invalid version".to_string(),
        })
        .unwrap();
        assert_eq!(json["error_message"], "invalid version");
    }
}
