use dioxus::prelude::*;
use ui::{use_auth, views::LoginView};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // Already signed in: skip straight to the projects page.
    if auth().is_authenticated() {
        nav.replace(Route::Projects {});
    }

    rsx! {
        LoginView {
            on_authenticated: move |_| {
                nav.replace(Route::Projects {});
            },
            on_show_register: move |_| {
                nav.push(Route::Register {});
            },
        }
    }
}
