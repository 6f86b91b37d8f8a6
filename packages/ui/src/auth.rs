//! Authentication context and hooks for the UI.

use api::UserInfo;
use dioxus::prelude::*;

use crate::alert::AlertMessage;
use crate::platform::make_session_manager;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    /// Email to pre-fill on the sign-in form after registering.
    pub pending_email: Option<String>,
    /// Shown once by the sign-in view, e.g. after signing out.
    pub notice: Option<AlertMessage>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    // Restored synchronously, so the first route already knows the user.
    let auth_state = use_signal(|| AuthState {
        user: make_session_manager().restore().map(|session| session.user),
        ..AuthState::default()
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to sign out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| {
        make_session_manager().logout();
        auth_state.set(AuthState {
            user: None,
            pending_email: None,
            notice: Some(AlertMessage::success("Session closed successfully")),
        });
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
