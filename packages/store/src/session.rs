//! # Sessions — typed access to the persisted token and user
//!
//! The client persists exactly two entries, mirroring browser `localStorage`:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"authToken"`) | the raw session token |
//! | [`USER_KEY`] (`"userData"`) | JSON of [`UserInfo`] |
//!
//! ## [`SessionStore`] trait
//!
//! A synchronous string key/value interface (`get_item` / `set_item` /
//! `remove_item`). Implementations live in sibling modules: an in-memory map
//! for tests, a directory of small files for desktop, and `localStorage` on the
//! web.
//!
//! ## [`Sessions`]
//!
//! Wraps a store and owns the encoding. [`Sessions::load`] returns a
//! [`Session`] only when both entries are present and the user parses; a user
//! entry that fails to parse removes both entries so the next start is clean.

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::models::{Session, UserInfo};

pub const TOKEN_KEY: &str = "authToken";
pub const USER_KEY: &str = "userData";

/// Key/value storage for session entries.
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&self, key: &str);
}

/// The persisted session, backed by a [`SessionStore`].
#[derive(Clone, Debug)]
pub struct Sessions<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> Sessions<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The stored token, if any.
    pub fn token(&self) -> Option<String> {
        self.store
            .get_item(TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    /// Load the stored session.
    ///
    /// Clears both entries when the user record is unreadable.
    pub fn load(&self) -> Option<Session> {
        let token = self.token()?;
        let raw = self.store.get_item(USER_KEY)?;
        match serde_json::from_str::<UserInfo>(&raw) {
            Ok(user) => Some(Session { token, user }),
            Err(e) => {
                warn!("Discarding unreadable stored user: {}", e);
                self.clear();
                None
            }
        }
    }

    /// Persist a session, replacing whatever was stored.
    pub fn save(&self, session: &Session) -> Result<(), StoreError> {
        let user = serde_json::to_string(&session.user)?;
        self.store.set_item(TOKEN_KEY, &session.token)?;
        self.store.set_item(USER_KEY, &user)?;
        debug!("Stored session {}", session.redacted_token());
        Ok(())
    }

    /// Remove both session entries.
    pub fn clear(&self) {
        self.store.remove_item(TOKEN_KEY);
        self.store.remove_item(USER_KEY);
    }
}
