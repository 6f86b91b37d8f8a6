//! # API crate — typed access to the remote portfolio API
//!
//! Everything the frontends need to talk to the hosted API lives here. The
//! crate holds no UI code and no global state: callers build an [`ApiClient`]
//! from configuration and a [`store::Sessions`] from a platform store, and
//! hand both to the services below.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: one async method per REST endpoint, `auth-token` header, error-body parsing |
//! | [`auth`] | [`SessionManager`]: login / register / logout / restore against the stored session |
//! | [`projects`] | [`ProjectService`]: list / get / save / delete with the stored token |
//! | [`models`] | Request/response types (`Project`, `ProjectDraft`, `ProjectInput`, login and register bodies) |
//! | [`validation`] | Client-side form rules, checked before any request is sent |
//! | [`error`] | [`ApiError`], whose `Display` is the message shown to the user |

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod projects;
pub mod validation;

pub use auth::SessionManager;
pub use client::{ApiClient, AUTH_HEADER};
pub use error::ApiError;
pub use models::{Project, ProjectDraft, ProjectInput, Session, UserInfo};
pub use projects::{ProjectService, SaveOutcome};
pub use validation::{LoginForm, RegisterForm, ValidationError};

pub use store::PortfolioConfig;
