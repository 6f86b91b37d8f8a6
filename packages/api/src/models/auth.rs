//! # Authentication payloads
//!
//! Request bodies for `POST /auth/login` and `POST /auth/register`, plus the
//! reading of login responses and error bodies.
//!
//! The login response is read as loose JSON rather than a fixed struct: the
//! API has returned the user under `user`, `usuario` or `data.user` depending
//! on the deployment, and sometimes not at all. [`session_from_login`] takes
//! the first user that carries an id and otherwise builds one from what the
//! response and the login form do provide.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::models::{Session, UserInfo};

/// Used when the API returns a user without any usable id.
const FALLBACK_USER_ID: &str = "temp-id";

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub itson_id: String,
    pub password: String,
}

/// Build a session from a successful login response.
pub(crate) fn session_from_login(body: &Value, email: &str) -> Result<Session, ApiError> {
    let token = body
        .get("token")
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .ok_or(ApiError::MissingToken)?;

    let user = [body.get("user"), body.get("usuario"), body.pointer("/data/user")]
        .into_iter()
        .flatten()
        .find(|value| !value.is_null())
        .and_then(|value| user_from_value(value, email))
        .unwrap_or_else(|| fallback_user(body, email));

    Ok(Session {
        token: token.to_string(),
        user,
    })
}

fn user_from_value(value: &Value, email: &str) -> Option<UserInfo> {
    let id = value
        .get("id")
        .or_else(|| value.get("_id"))
        .and_then(scalar_string)?;
    Some(UserInfo {
        id,
        email: string_field(value, "email").unwrap_or_else(|| email.to_string()),
        name: string_field(value, "name").unwrap_or_default(),
        itson_id: value
            .get("itsonId")
            .and_then(scalar_string)
            .unwrap_or_default(),
    })
}

fn fallback_user(body: &Value, email: &str) -> UserInfo {
    let id = body
        .get("userId")
        .or_else(|| body.get("id"))
        .and_then(scalar_string)
        .unwrap_or_else(|| FALLBACK_USER_ID.to_string());
    let name = string_field(body, "name")
        .unwrap_or_else(|| email.split('@').next().unwrap_or_default().to_string());
    UserInfo {
        id,
        email: email.to_string(),
        name,
        itson_id: body
            .get("itsonId")
            .and_then(scalar_string)
            .unwrap_or_default(),
    }
}

/// Server-provided message of an error body: `message`, then `error`, then `msg`.
pub(crate) fn error_message(body: Option<&Value>) -> Option<String> {
    let body = body?;
    ["message", "error", "msg"]
        .iter()
        .find_map(|key| string_field(body, key))
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Ids come back as strings or numbers depending on the backing database.
pub(crate) fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
