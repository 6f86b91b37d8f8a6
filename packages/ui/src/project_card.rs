use api::Project;
use dioxus::prelude::*;

/// One project in the grid, with edit and delete actions keyed by id.
#[component]
pub fn ProjectCard(
    project: Project,
    on_edit: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let edit_id = project.id.clone();
    let delete_id = project.id.clone();

    rsx! {
        div { class: "project-card",
            h3 { class: "project-title", "{project.title}" }
            p { class: "project-description", "{project.description}" }
            if !project.technologies.is_empty() {
                div { class: "project-tech",
                    for tech in project.technologies.iter() {
                        span { class: "tech-tag", "{tech}" }
                    }
                }
            }
            if let Some(repository) = project.repository.as_ref() {
                p { class: "project-repo",
                    a {
                        class: "link",
                        href: "{repository}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "View repository →"
                    }
                }
            }
            div { class: "project-actions",
                button {
                    class: "btn btn-small btn-secondary",
                    onclick: move |_| on_edit.call(edit_id.clone()),
                    "Edit"
                }
                button {
                    class: "btn btn-small btn-danger",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "Delete"
                }
            }
        }
    }
}
