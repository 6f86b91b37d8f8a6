//! This crate contains all shared UI for the workspace.
//!
//! The views take navigation callbacks instead of routes, so the web and
//! desktop entry crates each wrap them in their own `Route` components.

use dioxus::prelude::*;

mod platform;
pub use platform::{config, make_project_service, make_session_manager, make_sessions};

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod timer;
pub use timer::sleep;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

pub mod alert;
pub use alert::{show_alert, Alert, AlertKind, AlertMessage};

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod empty_state;
pub use empty_state::EmptyState;

mod project_card;
pub use project_card::ProjectCard;

mod project_form;
pub use project_form::ProjectFormModal;
