//! Platform constructors for configuration, session storage and the API services.
//!
//! - **Web** (WASM + `web` feature): session in `window.localStorage` via [`store::LocalStorageStore`]
//! - **Desktop** (native): session files under `<data_dir>/portfolio/session/` via [`store::FileStore`]
//! - **WASM without `web`**: a process-lifetime [`store::MemoryStore`]
//!
//! Configuration is read once. The bundled `portfolio.toml` is the base; on
//! desktop a file at `<config_dir>/portfolio/portfolio.toml` replaces it, and
//! `PORTFOLIO_API_BASE` overrides the base URL (at compile time on the web,
//! at run time on desktop).

use std::sync::OnceLock;

use api::{ApiClient, ProjectService, SessionManager};
use store::{PortfolioConfig, SessionStore, Sessions};
use tracing::warn;

const BUNDLED_CONFIG: &str = include_str!("../portfolio.toml");

static CONFIG: OnceLock<PortfolioConfig> = OnceLock::new();

/// The configuration for this run.
pub fn config() -> &'static PortfolioConfig {
    CONFIG.get_or_init(load_config)
}

fn bundled_config() -> PortfolioConfig {
    PortfolioConfig::from_toml(BUNDLED_CONFIG).unwrap_or_else(|e| {
        warn!("Invalid bundled config, using defaults: {}", e);
        PortfolioConfig::default()
    })
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> PortfolioConfig {
    let config = bundled_config();
    match option_env!("PORTFOLIO_API_BASE") {
        Some(url) => config.with_base_url(url),
        None => config,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> PortfolioConfig {
    let user_file = dirs::config_dir()
        .map(|dir| dir.join("portfolio").join(PortfolioConfig::filename()));

    let config = match user_file.as_ref().and_then(|p| std::fs::read_to_string(p).ok()) {
        Some(text) => PortfolioConfig::from_toml(&text).unwrap_or_else(|e| {
            warn!("Ignoring invalid {:?}: {}", user_file, e);
            bundled_config()
        }),
        None => bundled_config(),
    };

    match std::env::var("PORTFOLIO_API_BASE") {
        Ok(url) if !url.trim().is_empty() => config.with_base_url(url),
        _ => config,
    }
}

/// Create the platform's persisted session.
pub fn make_sessions() -> Sessions<impl SessionStore + Clone> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Sessions::new(store::LocalStorageStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        static MEMORY: OnceLock<store::MemoryStore> = OnceLock::new();
        Sessions::new(MEMORY.get_or_init(store::MemoryStore::new).clone())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("portfolio")
            .join("session");
        Sessions::new(store::FileStore::new(base))
    }
}

pub fn make_session_manager() -> SessionManager<impl SessionStore + Clone> {
    SessionManager::new(ApiClient::from_config(config()), make_sessions())
}

pub fn make_project_service() -> ProjectService<impl SessionStore + Clone> {
    ProjectService::new(ApiClient::from_config(config()), make_sessions())
}
