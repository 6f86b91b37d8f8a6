//! # Session models
//!
//! The two records the client keeps about the signed-in user. Both are
//! `Serialize + Deserialize` because they travel through client storage.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserInfo`] | The user as returned by the API and persisted under `userData`. Field names follow the API's camelCase (`itsonId`). |
//! | [`Session`] | The token plus the user it belongs to. Only exists while signed in. |

use serde::{Deserialize, Serialize};

/// User information persisted alongside the token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
    /// Six-digit institutional identifier, empty when the API did not send one.
    #[serde(default)]
    pub itson_id: String,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// An authenticated session: the opaque token and its user.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
}

impl Session {
    /// Short token prefix that is safe to put in logs.
    pub fn redacted_token(&self) -> String {
        let prefix: String = self.token.chars().take(8).collect();
        format!("{prefix}...")
    }
}
