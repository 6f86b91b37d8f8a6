use store::StoreError;
use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by the API client and the session/project services.
///
/// `Display` is the message shown to the user.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Network(#[from] reqwest::Error),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("No token received from the server")]
    MissingToken,
    #[error("No active session. Please sign in again.")]
    NotAuthenticated,
    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
impl ApiError {
    /// HTTP status of a rejected request.
    pub(crate) fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the request never left the client.
    pub(crate) fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}
