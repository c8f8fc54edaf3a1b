//! User record normalization
//!
//! Reshapes the raw `users/{id}` payload into a [`Record`]. Normalization is
//! permissive: fields that are missing or of an unexpected type become `None`
//! instead of failing the lookup.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Upstream field holding the user identifier
const FIELD_ID: &str = "id";

/// Upstream field holding the display name
const FIELD_FULL_NAME: &str = "full_name";

/// Upstream field holding the email address
const FIELD_EMAIL_ADDRESS: &str = "email_address";

/// A normalized user record
///
/// Created once per key on the first successful fetch and never modified
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Upstream identifier (numbers are rendered as decimal text)
    pub id: Option<String>,
    /// Taken from upstream `full_name`
    pub name: Option<String>,
    /// Taken from upstream `email_address`
    pub email: Option<String>,
    /// When the record was normalized, not when upstream created the user
    pub created_at: DateTime<Utc>,
}

impl Record {
    /// Builds a record from a raw upstream payload, stamped with the current time
    pub fn from_payload(payload: &Value) -> Self {
        Self::from_payload_at(payload, Utc::now())
    }

    /// Builds a record from a raw upstream payload with an explicit timestamp
    ///
    /// A payload that is not a JSON object yields a record with every
    /// upstream-sourced field set to `None`.
    pub fn from_payload_at(payload: &Value, created_at: DateTime<Utc>) -> Self {
        Self {
            id: payload.get(FIELD_ID).and_then(id_text),
            name: string_field(payload, FIELD_FULL_NAME),
            email: string_field(payload, FIELD_EMAIL_ADDRESS),
            created_at,
        }
    }
}

/// Accepts string and numeric identifiers
fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn string_field(payload: &Value, field: &str) -> Option<String> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
}
