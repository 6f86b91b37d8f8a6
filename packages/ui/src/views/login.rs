use api::LoginForm;
use dioxus::prelude::*;
use tracing::error;

use crate::alert::{show_alert, Alert, AlertMessage};
use crate::auth::use_auth;
use crate::platform::make_session_manager;

/// Sign-in form. `on_authenticated` fires once the session is stored.
#[component]
pub fn LoginView(on_authenticated: EventHandler<()>, on_show_register: EventHandler<()>) -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(|| auth.peek().pending_email.clone().unwrap_or_default());
    let mut password = use_signal(String::new);
    let alert = use_signal(|| None::<AlertMessage>);
    let mut loading = use_signal(|| false);

    // Consume the one-shot notice and pre-fill left by sign-out or registration.
    use_effect(move || {
        let (notice, has_pending) = {
            let state = auth.peek();
            (state.notice.clone(), state.pending_email.is_some())
        };
        if notice.is_some() || has_pending {
            let mut state = auth.write();
            state.notice = None;
            state.pending_email = None;
        }
        if let Some(notice) = notice {
            show_alert(alert, notice);
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let form = LoginForm {
            email: email(),
            password: password(),
        };
        if let Err(e) = form.validate() {
            show_alert(alert, AlertMessage::error(e.to_string()));
            return;
        }

        loading.set(true);
        spawn(async move {
            let result = make_session_manager().login(&form).await;
            loading.set(false);
            match result {
                Ok(session) => {
                    email.set(String::new());
                    password.set(String::new());
                    auth.write().user = Some(session.user);
                    on_authenticated.call(());
                }
                Err(e) => {
                    error!("Sign-in failed: {}", e);
                    show_alert(alert, AlertMessage::error(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-title", "Portfolio" }
                p { class: "auth-subtitle", "Sign in to manage your projects" }
                Alert { message: alert() }
                form { class: "auth-form", onsubmit: handle_login,
                    label { class: "field",
                        span { "Email" }
                        input {
                            r#type: "email",
                            placeholder: "you@itson.edu.mx",
                            autocomplete: "email",
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    label { class: "field",
                        span { "Password" }
                        input {
                            r#type: "password",
                            autocomplete: "current-password",
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() {
                            "Signing in..."
                        } else {
                            "Sign in"
                        }
                    }
                }
                p { class: "auth-switch",
                    "Don't have an account? "
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| on_show_register.call(()),
                        "Create one"
                    }
                }
            }
        }
    }
}
