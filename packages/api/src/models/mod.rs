//! Data models exchanged with the portfolio API.

mod auth;
mod project;

pub(crate) use auth::{error_message, session_from_login};
pub use auth::{LoginRequest, RegisterRequest};
pub use project::{split_list, Project, ProjectDraft, ProjectInput};
pub use store::{Session, UserInfo};
