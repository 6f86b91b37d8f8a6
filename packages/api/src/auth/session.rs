//! Sign-in, registration and sign-out on top of the persisted session.

use store::{SessionStore, Sessions};
use tracing::info;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::Session;
use crate::validation::{LoginForm, RegisterForm};

/// Owns the session lifecycle: validates forms, calls the auth endpoints and
/// keeps the stored session in step.
#[derive(Clone, Debug)]
pub struct SessionManager<S: SessionStore> {
    client: ApiClient,
    sessions: Sessions<S>,
}

impl<S: SessionStore> SessionManager<S> {
    pub fn new(client: ApiClient, sessions: Sessions<S>) -> Self {
        Self { client, sessions }
    }

    pub fn sessions(&self) -> &Sessions<S> {
        &self.sessions
    }

    /// The session left by a previous run, if still readable.
    pub fn restore(&self) -> Option<Session> {
        let session = self.sessions.load();
        match &session {
            Some(s) => info!("Restored session for {}", s.user.email),
            None => info!("No active session"),
        }
        session
    }

    /// Sign in and persist the session.
    pub async fn login(&self, form: &LoginForm) -> Result<Session, ApiError> {
        let request = form.validate()?;
        info!("Signing in {}", request.email);
        let session = self.client.login(&request).await?;
        self.sessions.save(&session)?;
        info!(
            "Signed in {} with token {}",
            session.user.email,
            session.redacted_token()
        );
        Ok(session)
    }

    /// Create an account. Does not sign in.
    pub async fn register(&self, form: &RegisterForm) -> Result<(), ApiError> {
        let request = form.validate()?;
        info!("Registering {}", request.email);
        self.client.register(&request).await
    }

    pub fn logout(&self) {
        self.sessions.clear();
        info!("Signed out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use store::{MemoryStore, TOKEN_KEY, USER_KEY};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn manager(server: &MockServer) -> SessionManager<MemoryStore> {
        SessionManager::new(
            ApiClient::new(server.uri()),
            Sessions::new(MemoryStore::new()),
        )
    }

    fn register_form(itson_id: &str) -> RegisterForm {
        RegisterForm {
            name: "Ana Lopez".to_string(),
            email: "ana@itson.edu.mx".to_string(),
            itson_id: itson_id.to_string(),
            password: "secret1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_persists_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "tok-1",
                "user": { "id": "u1", "email": "ana@itson.edu.mx", "name": "Ana Lopez", "itsonId": "123456" }
            })))
            .mount(&server)
            .await;

        let manager = manager(&server);
        let session = manager
            .login(&LoginForm {
                email: " ana@itson.edu.mx ".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(session.user.id, "u1");
        let store = manager.sessions().store();
        assert_eq!(store.get_item(TOKEN_KEY).as_deref(), Some("tok-1"));
        assert!(store.get_item(USER_KEY).unwrap().contains("\"itsonId\":\"123456\""));
        assert_eq!(manager.restore(), Some(session));
    }

    #[tokio::test]
    async fn test_failed_login_stores_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "User not found" })))
            .mount(&server)
            .await;

        let manager = manager(&server);
        let err = manager
            .login(&LoginForm {
                email: "ghost@itson.edu.mx".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "User not found");
        assert!(manager.restore().is_none());
    }

    #[tokio::test]
    async fn test_login_without_token_stores_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
            .mount(&server)
            .await;

        let manager = manager(&server);
        let err = manager
            .login(&LoginForm {
                email: "ana@itson.edu.mx".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::MissingToken));
        assert!(manager.sessions().token().is_none());
    }

    #[tokio::test]
    async fn test_invalid_registration_never_reaches_the_api() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let manager = manager(&server);
        for itson_id in ["12345", "1234567", "abcdef"] {
            let err = manager.register(&register_form(itson_id)).await.unwrap_err();
            assert!(err.is_validation());
            assert_eq!(err.to_string(), "ITSON ID must be exactly 6 digits");
        }

        let short_name = RegisterForm {
            name: "Ana".to_string(),
            ..register_form("123456")
        };
        assert!(manager.register(&short_name).await.unwrap_err().is_validation());

        let short_password = RegisterForm {
            password: "abc".to_string(),
            ..register_form("123456")
        };
        assert!(manager
            .register(&short_password)
            .await
            .unwrap_err()
            .is_validation());
    }

    #[tokio::test]
    async fn test_register_sends_camel_case_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .and(wiremock::matchers::body_json(json!({
                "name": "Ana Lopez",
                "email": "ana@itson.edu.mx",
                "itsonId": "123456",
                "password": "secret1"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "message": "created" })))
            .expect(1)
            .mount(&server)
            .await;

        let manager = manager(&server);
        manager.register(&register_form("123456")).await.unwrap();
        // Registering does not sign in.
        assert!(manager.restore().is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let server = MockServer::start().await;
        let manager = manager(&server);
        manager
            .sessions()
            .save(&Session {
                token: "tok".to_string(),
                user: store::UserInfo {
                    id: "u1".to_string(),
                    email: "ana@itson.edu.mx".to_string(),
                    name: "Ana Lopez".to_string(),
                    itson_id: "123456".to_string(),
                },
            })
            .unwrap();
        assert!(manager.restore().is_some());

        manager.logout();

        assert!(manager.restore().is_none());
        assert!(manager.sessions().store().get_item(TOKEN_KEY).is_none());
        assert!(manager.sessions().store().get_item(USER_KEY).is_none());
    }
}
