//! # Project records and the project form
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Project`] | A project as returned by `GET /projects` and `GET /projects/{id}`. |
//! | [`ProjectDraft`] | The raw fields of the create/edit form. Lists are comma-separated strings. |
//! | [`ProjectInput`] | The JSON body of `POST /projects` and `PUT /projects/{id}`. |
//!
//! The API is backed by MongoDB, so records are keyed by `_id`; some
//! deployments serialise a virtual `id` as well, or only `id`. Deserialisation
//! goes through a lenient record type that accepts any of those and tolerates
//! `null` lists.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::auth::scalar_string;
use crate::validation::ValidationError;

/// A project owned by the signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProjectRecord")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct ProjectRecord {
    #[serde(rename = "_id", default)]
    mongo_id: Option<Value>,
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    technologies: Option<Vec<String>>,
    #[serde(default)]
    repository: Option<String>,
    #[serde(default)]
    images: Option<Vec<String>>,
}

impl TryFrom<ProjectRecord> for Project {
    type Error = String;

    fn try_from(record: ProjectRecord) -> Result<Self, Self::Error> {
        let id = record
            .mongo_id
            .as_ref()
            .and_then(scalar_string)
            .or_else(|| record.id.as_ref().and_then(scalar_string))
            .ok_or_else(|| "project without an id".to_string())?;
        Ok(Self {
            id,
            title: record.title.unwrap_or_default(),
            description: record.description.unwrap_or_default(),
            technologies: record.technologies.unwrap_or_default(),
            repository: record.repository.filter(|r| !r.is_empty()),
            images: record.images,
        })
    }
}

/// Create/edit form contents, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    /// Comma-separated, e.g. `"Rust, Dioxus"`.
    pub technologies: String,
    pub repository: String,
    /// Comma-separated image URLs.
    pub images: String,
}

impl ProjectDraft {
    /// Fill the form from an existing project.
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            technologies: project.technologies.join(", "),
            repository: project.repository.clone().unwrap_or_default(),
            images: project
                .images
                .as_ref()
                .map(|images| images.join(", "))
                .unwrap_or_default(),
        }
    }

    /// Validate the form and build the request body.
    ///
    /// Title and description are required after trimming.
    pub fn to_input(&self) -> Result<ProjectInput, ValidationError> {
        let title = self.title.trim();
        let description = self.description.trim();
        if title.is_empty() || description.is_empty() {
            return Err(ValidationError::MissingTitleOrDescription);
        }

        let repository = self.repository.trim();
        let images = split_list(&self.images);
        Ok(ProjectInput {
            title: title.to_string(),
            description: description.to_string(),
            technologies: split_list(&self.technologies),
            repository: (!repository.is_empty()).then(|| repository.to_string()),
            images: (!images.is_empty()).then_some(images),
        })
    }
}

/// Body of `POST /projects` and `PUT /projects/{id}`.
///
/// No owner id: the API takes it from the token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

/// Split a comma-separated field, trimming entries and dropping empty ones.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_accepts_mongo_and_plain_ids() {
        let project: Project = serde_json::from_value(json!({
            "_id": "65f0c1", "title": "Portfolio", "description": "Site",
            "technologies": ["Rust"], "repository": "https://github.com/a/b"
        }))
        .unwrap();
        assert_eq!(project.id, "65f0c1");
        assert_eq!(project.repository.as_deref(), Some("https://github.com/a/b"));
        assert!(project.images.is_none());

        let project: Project =
            serde_json::from_value(json!({ "id": 7, "title": "T", "description": "D" })).unwrap();
        assert_eq!(project.id, "7");
        assert!(project.technologies.is_empty());

        // mongoose with virtuals sends both
        let project: Project = serde_json::from_value(json!({
            "_id": "abc", "id": "abc", "title": "T", "description": "D",
            "technologies": null, "images": ["https://img/1.png"]
        }))
        .unwrap();
        assert_eq!(project.id, "abc");
        assert_eq!(project.images, Some(vec!["https://img/1.png".to_string()]));
    }

    #[test]
    fn test_project_without_id_is_rejected() {
        let result: Result<Project, _> =
            serde_json::from_value(json!({ "title": "T", "description": "D" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_draft_requires_title_and_description() {
        let draft = ProjectDraft {
            title: "   ".to_string(),
            description: "Something".to_string(),
            ..Default::default()
        };
        assert_eq!(
            draft.to_input(),
            Err(ValidationError::MissingTitleOrDescription)
        );

        let draft = ProjectDraft {
            title: "Title".to_string(),
            ..Default::default()
        };
        assert_eq!(
            draft.to_input(),
            Err(ValidationError::MissingTitleOrDescription)
        );
    }

    #[test]
    fn test_draft_splits_lists_and_omits_empty_optionals() {
        let draft = ProjectDraft {
            title: " Chess ".to_string(),
            description: "Online chess".to_string(),
            technologies: "Rust, , Dioxus ,".to_string(),
            repository: "  ".to_string(),
            images: " , ".to_string(),
        };
        let input = draft.to_input().unwrap();
        assert_eq!(input.title, "Chess");
        assert_eq!(input.technologies, vec!["Rust", "Dioxus"]);

        let body = serde_json::to_value(&input).unwrap();
        assert_eq!(
            body,
            json!({ "title": "Chess", "description": "Online chess", "technologies": ["Rust", "Dioxus"] })
        );
    }

    #[test]
    fn test_technologies_always_sent() {
        let draft = ProjectDraft {
            title: "T".to_string(),
            description: "D".to_string(),
            repository: "https://github.com/a/b".to_string(),
            images: "a.png,b.png".to_string(),
            ..Default::default()
        };
        let body = serde_json::to_value(draft.to_input().unwrap()).unwrap();
        assert_eq!(body["technologies"], json!([]));
        assert_eq!(body["repository"], "https://github.com/a/b");
        assert_eq!(body["images"], json!(["a.png", "b.png"]));
    }

    #[test]
    fn test_draft_from_project_joins_lists() {
        let project = Project {
            id: "p1".to_string(),
            title: "T".to_string(),
            description: "D".to_string(),
            technologies: vec!["Rust".to_string(), "Axum".to_string()],
            repository: None,
            images: Some(vec!["a.png".to_string(), "b.png".to_string()]),
        };
        let draft = ProjectDraft::from_project(&project);
        assert_eq!(draft.technologies, "Rust, Axum");
        assert_eq!(draft.images, "a.png, b.png");
        assert_eq!(draft.repository, "");
    }
}
