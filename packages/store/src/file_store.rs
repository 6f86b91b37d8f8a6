//! # Filesystem-backed session store
//!
//! [`FileStore`] is the [`SessionStore`] used on desktop. Each key is one
//! small file under a base directory, so the layout matches what the browser
//! keeps in `localStorage`:
//!
//! ```text
//! <base_dir>/
//! ├── authToken      # raw token
//! └── userData       # user JSON
//! ```
//!
//! Callers pick the base directory; the desktop app uses
//! `dirs::data_dir()/portfolio/session`.

use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::warn;

use crate::error::StoreError;
use crate::session::SessionStore;

/// Filesystem-backed SessionStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn item_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl SessionStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.item_path(key)).ok()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.item_path(key), value)?;
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        let path = self.item_path(key);
        match std::fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove {:?}: {}", path, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Session, UserInfo};
    use crate::session::Sessions;

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("session");

        let sessions = Sessions::new(FileStore::new(base.clone()));
        let session = Session {
            token: "file-token".to_string(),
            user: UserInfo {
                id: "u7".to_string(),
                email: "leo@itson.edu.mx".to_string(),
                name: "Leonardo".to_string(),
                itson_id: "654321".to_string(),
            },
        };
        sessions.save(&session).unwrap();

        // Re-open from same directory
        let reopened = Sessions::new(FileStore::new(base.clone()));
        assert_eq!(reopened.load(), Some(session));

        reopened.clear();
        assert!(!base.join("authToken").exists());
        assert!(!base.join("userData").exists());
    }

    #[test]
    fn test_missing_directory_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("never-created"));
        assert!(store.get_item("authToken").is_none());
        // Removing from a directory that does not exist is a no-op.
        store.remove_item("authToken");
    }

    #[test]
    fn test_remove_leaves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        store.set_item("authToken", "tok").unwrap();
        store.set_item("userData", "{}").unwrap();

        store.remove_item("authToken");
        // Second removal hits NotFound and stays quiet.
        store.remove_item("authToken");

        assert!(store.get_item("authToken").is_none());
        assert_eq!(store.get_item("userData").as_deref(), Some("{}"));
    }
}
