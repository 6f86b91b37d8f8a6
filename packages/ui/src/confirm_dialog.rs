use dioxus::prelude::*;

use crate::views::ModalOverlay;

/// Yes/no question over the page. Clicking outside counts as cancel.
#[component]
pub fn ConfirmDialog(
    message: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay { on_close: move |_| on_cancel.call(()),
            div { class: "modal-body confirm-dialog",
                p { class: "confirm-message", "{message}" }
                div { class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        r#type: "button",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
