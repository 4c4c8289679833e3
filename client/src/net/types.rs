//! Wire DTOs for the Mentutor REST API.
//!
//! DESIGN
//! ======
//! These mirror the remote API's JSON payloads. Numeric identifiers are
//! accepted as JSON numbers or numeric strings because list endpoints and
//! login have not always agreed on the representation.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful `POST /login` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Raw role string; checked against the known roles by the caller.
    pub role: String,
    #[serde(deserialize_with = "deserialize_u64_lenient")]
    pub id_user: u64,
    /// Avatar image URL, possibly empty.
    #[serde(default)]
    pub images: String,
    /// External authorization URL; non-empty only when a mentee still has to
    /// link a third-party account.
    #[serde(default)]
    pub auth_gmail: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// One entry of `GET /admin/classes`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSummary {
    /// Stable key used as the `<option>` value.
    #[serde(deserialize_with = "deserialize_u64_lenient")]
    pub id_class: u64,
    pub class_name: String,
}

/// Body of `POST /admin/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub role: String,
    pub id_class: u64,
    pub password: String,
}

/// Body of `POST /admin/classes`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewClass {
    pub class_name: String,
}

/// List endpoints answer either with a bare array or with `{ "data": [...] }`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> ListPayload<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Wrapped { data: items } => items,
        }
    }
}

fn deserialize_u64_lenient<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= u64::MAX as f64
            {
                return Ok(float as u64);
            }
            Err(D::Error::custom("expected non-negative integer"))
        }
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| D::Error::custom("expected numeric string")),
        _ => Err(D::Error::custom("expected number")),
    }
}
