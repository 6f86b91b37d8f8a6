//! Create/edit modal for a single project.
//!
//! The modal edits a [`ProjectDraft`] owned by the caller; validation and the
//! actual save happen in the caller's `on_save`.

use api::ProjectDraft;
use dioxus::prelude::*;

use crate::alert::{Alert, AlertMessage};
use crate::views::ModalOverlay;

#[component]
pub fn ProjectFormModal(
    draft: Signal<ProjectDraft>,
    editing: bool,
    saving: bool,
    alert: Option<AlertMessage>,
    on_save: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let mut draft = draft;
    let current = draft();
    let heading = if editing { "Edit project" } else { "New project" };
    let busy_label = if editing { "Updating..." } else { "Saving..." };

    rsx! {
        ModalOverlay { on_close: move |_| on_close.call(()),
            div { class: "modal-body",
                div { class: "modal-header",
                    h2 { class: "modal-title", "{heading}" }
                    button {
                        class: "modal-close",
                        r#type: "button",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                Alert { message: alert }
                form {
                    class: "project-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        on_save.call(());
                    },
                    label { class: "field",
                        span { "Title *" }
                        input {
                            r#type: "text",
                            value: current.title.clone(),
                            oninput: move |evt| draft.write().title = evt.value(),
                        }
                    }
                    label { class: "field",
                        span { "Description *" }
                        textarea {
                            rows: "4",
                            value: current.description.clone(),
                            oninput: move |evt| draft.write().description = evt.value(),
                        }
                    }
                    label { class: "field",
                        span { "Technologies" }
                        input {
                            r#type: "text",
                            placeholder: "Rust, Dioxus, PostgreSQL",
                            value: current.technologies.clone(),
                            oninput: move |evt| draft.write().technologies = evt.value(),
                        }
                        small { class: "field-hint", "Separate with commas" }
                    }
                    label { class: "field",
                        span { "Repository" }
                        input {
                            r#type: "url",
                            placeholder: "https://github.com/you/project",
                            value: current.repository.clone(),
                            oninput: move |evt| draft.write().repository = evt.value(),
                        }
                    }
                    label { class: "field",
                        span { "Images" }
                        input {
                            r#type: "text",
                            placeholder: "https://.../cover.png, https://.../detail.png",
                            value: current.images.clone(),
                            oninput: move |evt| draft.write().images = evt.value(),
                        }
                        small { class: "field-hint", "Image URLs separated by commas" }
                    }
                    div { class: "modal-actions",
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: saving,
                            if saving {
                                "{busy_label}"
                            } else {
                                "Save project"
                            }
                        }
                    }
                }
            }
        }
    }
}
