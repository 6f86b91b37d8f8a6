//! Project CRUD for the signed-in user.
//!
//! Every call reads the token from the stored session at call time, so a
//! sign-out in between is noticed as [`ApiError::NotAuthenticated`] instead of
//! a request with a stale token.

use store::{SessionStore, Sessions};
use tracing::info;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Project, ProjectDraft};

/// Which write a save turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

impl SaveOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SaveOutcome::Created => "Project created successfully",
            SaveOutcome::Updated => "Project updated successfully",
        }
    }
}

/// Project operations with the stored token attached.
#[derive(Clone, Debug)]
pub struct ProjectService<S: SessionStore> {
    client: ApiClient,
    sessions: Sessions<S>,
}

impl<S: SessionStore> ProjectService<S> {
    pub fn new(client: ApiClient, sessions: Sessions<S>) -> Self {
        Self { client, sessions }
    }

    fn token(&self) -> Result<String, ApiError> {
        self.sessions.token().ok_or(ApiError::NotAuthenticated)
    }

    pub async fn list(&self) -> Result<Vec<Project>, ApiError> {
        let token = self.token()?;
        self.client.list_projects(&token).await
    }

    pub async fn get(&self, id: &str) -> Result<Project, ApiError> {
        let token = self.token()?;
        self.client.get_project(&token, id).await
    }

    /// Create when `editing` is `None`, otherwise update that project.
    ///
    /// The draft is validated before the session is even looked at.
    pub async fn save(
        &self,
        editing: Option<&str>,
        draft: &ProjectDraft,
    ) -> Result<SaveOutcome, ApiError> {
        let input = draft.to_input()?;
        let token = self.token()?;
        match editing {
            Some(id) => {
                self.client.update_project(&token, id, &input).await?;
                info!("Updated project {}", id);
                Ok(SaveOutcome::Updated)
            }
            None => {
                self.client.create_project(&token, &input).await?;
                info!("Created project {:?}", input.title);
                Ok(SaveOutcome::Created)
            }
        }
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let token = self.token()?;
        self.client.delete_project(&token, id).await?;
        info!("Deleted project {}", id);
        Ok(())
    }
}
