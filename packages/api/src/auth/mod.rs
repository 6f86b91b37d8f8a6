//! Session lifecycle for the token-based API.

mod session;

pub use session::SessionManager;
