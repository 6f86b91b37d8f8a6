use api::RegisterForm;
use dioxus::prelude::*;
use tracing::error;

use crate::alert::{show_alert, Alert, AlertMessage};
use crate::auth::use_auth;
use crate::platform::{config, make_session_manager};
use crate::timer::sleep;

/// Account creation form. On success it waits briefly on the confirmation,
/// then hands the email to the sign-in view via `on_show_login`.
#[component]
pub fn RegisterView(on_show_login: EventHandler<()>) -> Element {
    let mut auth = use_auth();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut itson_id = use_signal(String::new);
    let mut password = use_signal(String::new);
    let alert = use_signal(|| None::<AlertMessage>);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let form = RegisterForm {
            name: name(),
            email: email(),
            itson_id: itson_id(),
            password: password(),
        };
        if let Err(e) = form.validate() {
            show_alert(alert, AlertMessage::error(e.to_string()));
            return;
        }

        loading.set(true);
        spawn(async move {
            let result = make_session_manager().register(&form).await;
            loading.set(false);
            match result {
                Ok(()) => {
                    show_alert(
                        alert,
                        AlertMessage::success("Account created successfully. You can now sign in."),
                    );
                    name.set(String::new());
                    itson_id.set(String::new());
                    password.set(String::new());
                    sleep(config().ui.register_redirect()).await;
                    auth.write().pending_email = Some(form.email.trim().to_string());
                    on_show_login.call(());
                }
                Err(e) => {
                    error!("Registration failed: {}", e);
                    show_alert(alert, AlertMessage::error(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-title", "Create account" }
                p { class: "auth-subtitle", "Register with your ITSON details" }
                Alert { message: alert() }
                form { class: "auth-form", onsubmit: handle_register,
                    label { class: "field",
                        span { "Full name" }
                        input {
                            r#type: "text",
                            autocomplete: "name",
                            value: name(),
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
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
                        span { "ITSON ID" }
                        input {
                            r#type: "text",
                            inputmode: "numeric",
                            maxlength: "6",
                            placeholder: "123456",
                            value: itson_id(),
                            oninput: move |evt| itson_id.set(evt.value()),
                        }
                    }
                    label { class: "field",
                        span { "Password" }
                        input {
                            r#type: "password",
                            autocomplete: "new-password",
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                        small { class: "field-hint", "At least 6 characters" }
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() {
                            "Creating account..."
                        } else {
                            "Create account"
                        }
                    }
                }
                p { class: "auth-switch",
                    "Already have an account? "
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| on_show_login.call(()),
                        "Sign in"
                    }
                }
            }
        }
    }
}
