use dioxus::prelude::*;

use ui::AuthProvider;
use views::{Login, Projects, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/projects")]
    Projects {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Portfolio" }
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        AuthProvider {
            Router::<Route> {}
        }
    }
}

#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    // The session was restored before the first render.
    if auth().is_authenticated() {
        nav.replace(Route::Projects {});
    } else {
        nav.replace(Route::Login {});
    }

    rsx! {}
}
