//! # HTTP client for the portfolio API
//!
//! [`ApiClient`] maps each endpoint to one async method. It holds no session
//! state: protected calls take the token as an argument and send it in the
//! [`AUTH_HEADER`] header.
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | [`login`](ApiClient::login) | `POST /auth/login` |
//! | [`register`](ApiClient::register) | `POST /auth/register` |
//! | [`list_projects`](ApiClient::list_projects) | `GET /projects` |
//! | [`get_project`](ApiClient::get_project) | `GET /projects/{id}` |
//! | [`create_project`](ApiClient::create_project) | `POST /projects` |
//! | [`update_project`](ApiClient::update_project) | `PUT /projects/{id}` |
//! | [`delete_project`](ApiClient::delete_project) | `DELETE /projects/{id}` |
//!
//! Any non-2xx status becomes [`ApiError::Status`] carrying the server's
//! `message`/`error`/`msg` when the body has one, or a per-endpoint fallback.

use reqwest::{RequestBuilder, Response, StatusCode};
use serde_json::Value;
use store::PortfolioConfig;
use tracing::{debug, error};

use crate::error::ApiError;
use crate::models::{
    error_message, session_from_login, LoginRequest, Project, ProjectInput, RegisterRequest,
    Session,
};

/// Header carrying the session token on protected endpoints.
pub const AUTH_HEADER: &str = "auth-token";

/// Client for the remote portfolio API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &PortfolioConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn project_url(&self, id: &str) -> String {
        self.url(&format!("/projects/{id}"))
    }

    /// Sign in and build the session from the response.
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        debug!("POST /auth/login for {}", request.email);
        let response = self.http.post(self.url("/auth/login")).json(request).send().await?;
        let body = success_body(response, |_| "Failed to sign in".to_string()).await?;
        session_from_login(&body.unwrap_or(Value::Null), &request.email)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        debug!("POST /auth/register for {}", request.email);
        let response = self
            .http
            .post(self.url("/auth/register"))
            .json(request)
            .send()
            .await?;
        success_body(response, |_| "Failed to register user".to_string()).await?;
        Ok(())
    }

    pub async fn list_projects(&self, token: &str) -> Result<Vec<Project>, ApiError> {
        debug!("GET /projects");
        let response = authorized(self.http.get(self.url("/projects")), token)
            .send()
            .await?;
        let body = success_body(response, |_| "Failed to load projects".to_string()).await?;
        Ok(serde_json::from_value(body.unwrap_or(Value::Null))?)
    }

    pub async fn get_project(&self, token: &str, id: &str) -> Result<Project, ApiError> {
        debug!("GET /projects/{}", id);
        let response = authorized(self.http.get(self.project_url(id)), token)
            .send()
            .await?;
        let body = success_body(response, |_| "Failed to load project".to_string()).await?;
        Ok(serde_json::from_value(body.unwrap_or(Value::Null))?)
    }

    pub async fn create_project(&self, token: &str, input: &ProjectInput) -> Result<(), ApiError> {
        debug!("POST /projects");
        let response = authorized(self.http.post(self.url("/projects")), token)
            .json(input)
            .send()
            .await?;
        success_body(response, status_fallback).await?;
        Ok(())
    }

    pub async fn update_project(
        &self,
        token: &str,
        id: &str,
        input: &ProjectInput,
    ) -> Result<(), ApiError> {
        debug!("PUT /projects/{}", id);
        let response = authorized(self.http.put(self.project_url(id)), token)
            .json(input)
            .send()
            .await?;
        success_body(response, status_fallback).await?;
        Ok(())
    }

    pub async fn delete_project(&self, token: &str, id: &str) -> Result<(), ApiError> {
        debug!("DELETE /projects/{}", id);
        let response = authorized(self.http.delete(self.project_url(id)), token)
            .send()
            .await?;
        success_status(response, |_| "Failed to delete project".to_string()).await
    }
}

fn authorized(request: RequestBuilder, token: &str) -> RequestBuilder {
    request.header(AUTH_HEADER, token)
}

/// `Error 500: Internal Server Error`
fn status_fallback(status: StatusCode) -> String {
    format!(
        "Error {}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    )
}

/// Check only the status of a response; a 2xx body is never read.
async fn success_status(
    response: Response,
    fallback: impl FnOnce(StatusCode) -> String,
) -> Result<(), ApiError> {
    if response.status().is_success() {
        return Ok(());
    }
    success_body(response, fallback).await.map(|_| ())
}

/// Read the body of a response, turning a non-2xx status into an error.
///
/// Returns `None` for an empty 2xx body. A 2xx body that is not JSON is a
/// decode error; a non-2xx body that is not JSON just falls back.
async fn success_body(
    response: Response,
    fallback: impl FnOnce(StatusCode) -> String,
) -> Result<Option<Value>, ApiError> {
    let status = response.status();
    let text = response.text().await?;

    if status.is_success() {
        if text.trim().is_empty() {
            return Ok(None);
        }
        return Ok(Some(serde_json::from_str(&text)?));
    }

    let body = serde_json::from_str::<Value>(&text).ok();
    let message = error_message(body.as_ref()).unwrap_or_else(|| fallback(status));
    error!("Request failed with {}: {}", status, message);
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}
