use dioxus::prelude::*;

/// Centered placeholder with a single call to action.
#[component]
pub fn EmptyState(
    icon: String,
    title: String,
    text: String,
    action_label: String,
    on_action: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "empty-state",
            div { class: "empty-state-icon", "{icon}" }
            h3 { "{title}" }
            p { "{text}" }
            button {
                class: "btn btn-primary",
                onclick: move |_| on_action.call(()),
                "{action_label}"
            }
        }
    }
}
