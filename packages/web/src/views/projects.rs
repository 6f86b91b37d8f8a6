use dioxus::prelude::*;
use ui::{use_auth, views::ProjectsView};

use crate::Route;

/// Project management, reachable only with a session.
#[component]
pub fn Projects() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // Also fires after sign-out, since this reads the auth signal.
    if !auth().is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        ProjectsView {}
    }
}
