//! The signed-in page: project grid, create/edit modal and delete confirmation.

use api::ProjectDraft;
use dioxus::prelude::*;
use tracing::error;

use crate::alert::{show_alert, Alert, AlertMessage};
use crate::auth::{use_auth, LogoutButton};
use crate::confirm_dialog::ConfirmDialog;
use crate::empty_state::EmptyState;
use crate::platform::{config, make_project_service};
use crate::project_card::ProjectCard;
use crate::project_form::ProjectFormModal;
use crate::timer::sleep;

const DELETE_QUESTION: &str =
    "Are you sure you want to delete this project? This action cannot be undone.";

#[component]
pub fn ProjectsView() -> Element {
    let auth = use_auth();

    let mut projects = use_resource(|| async move {
        make_project_service()
            .list()
            .await
            .map_err(|e| e.to_string())
    });

    let mut modal_open = use_signal(|| false);
    let mut editing_id = use_signal(|| None::<String>);
    let mut draft = use_signal(ProjectDraft::default);
    let mut modal_alert = use_signal(|| None::<AlertMessage>);
    let page_alert = use_signal(|| None::<AlertMessage>);
    let mut saving = use_signal(|| false);
    let mut pending_delete = use_signal(|| None::<String>);

    let mut open_create = move || {
        editing_id.set(None);
        draft.set(ProjectDraft::default());
        modal_alert.set(None);
        modal_open.set(true);
    };

    let open_edit = move |id: String| {
        editing_id.set(Some(id.clone()));
        draft.set(ProjectDraft::default());
        modal_alert.set(None);
        modal_open.set(true);
        spawn(async move {
            match make_project_service().get(&id).await {
                Ok(project) => {
                    // The user may have closed or switched projects meanwhile.
                    if editing_id.peek().as_deref() == Some(id.as_str()) {
                        draft.set(ProjectDraft::from_project(&project));
                    }
                }
                Err(e) => {
                    error!("Failed to load project {}: {}", id, e);
                    show_alert(modal_alert, AlertMessage::error(format!("Error: {e}")));
                }
            }
        });
    };

    let mut close_modal = move || {
        modal_open.set(false);
        editing_id.set(None);
    };

    let handle_save = move |_: ()| {
        if saving() {
            return;
        }
        let current = draft();
        if let Err(e) = current.to_input() {
            show_alert(modal_alert, AlertMessage::error(e.to_string()));
            return;
        }
        let editing = editing_id();

        saving.set(true);
        spawn(async move {
            let result = make_project_service()
                .save(editing.as_deref(), &current)
                .await;
            saving.set(false);
            match result {
                Ok(outcome) => {
                    show_alert(modal_alert, AlertMessage::success(outcome.message()));
                    sleep(config().ui.save_close()).await;
                    modal_open.set(false);
                    editing_id.set(None);
                    projects.restart();
                }
                Err(e) => {
                    error!("Failed to save project: {}", e);
                    show_alert(modal_alert, AlertMessage::error(format!("Error: {e}")));
                }
            }
        });
    };

    let request_delete = move |id: String| pending_delete.set(Some(id));

    let confirm_delete = move |_: ()| {
        let Some(id) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        spawn(async move {
            match make_project_service().delete(&id).await {
                Ok(()) => projects.restart(),
                Err(e) => {
                    error!("Failed to delete project {}: {}", id, e);
                    show_alert(
                        page_alert,
                        AlertMessage::error(format!("Failed to delete project: {e}")),
                    );
                }
            }
        });
    };

    let body = match &*projects.read() {
        None => rsx! {
            div { class: "loading",
                div { class: "spinner" }
                p { "Loading projects..." }
            }
        },
        Some(Err(message)) => rsx! {
            EmptyState {
                icon: "⚠",
                title: "Failed to load projects",
                text: message.clone(),
                action_label: "Retry",
                on_action: move |_| projects.restart(),
            }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            EmptyState {
                icon: "📁",
                title: "You have no projects yet",
                text: "Start by creating your first project",
                action_label: "+ Create project",
                on_action: move |_| open_create(),
            }
        },
        Some(Ok(list)) => rsx! {
            div { class: "projects-grid",
                for project in list.iter() {
                    ProjectCard {
                        key: "{project.id}",
                        project: project.clone(),
                        on_edit: open_edit,
                        on_delete: request_delete,
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                h1 { class: "app-title", "My projects" }
                div { class: "app-header-actions",
                    if let Some(user) = auth().user {
                        span { class: "user-name", "{user.display_name()}" }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| open_create(),
                        "+ New project"
                    }
                    LogoutButton { class: "btn btn-secondary" }
                }
            }
            Alert { message: page_alert() }
            main { class: "projects-container", {body} }
            if modal_open() {
                ProjectFormModal {
                    draft,
                    editing: editing_id().is_some(),
                    saving: saving(),
                    alert: modal_alert(),
                    on_save: handle_save,
                    on_close: move |_| close_modal(),
                }
            }
            if pending_delete().is_some() {
                ConfirmDialog {
                    message: DELETE_QUESTION.to_string(),
                    confirm_label: "Delete",
                    on_confirm: confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}
