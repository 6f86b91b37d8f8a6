pub mod config;
pub mod error;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use config::PortfolioConfig;
pub use error::StoreError;
pub use models::{Session, UserInfo};
pub use session::{SessionStore, Sessions, TOKEN_KEY, USER_KEY};
