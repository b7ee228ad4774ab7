use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Mama Care";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default port for the article listing service.
pub const DEFAULT_ARTICLE_API_PORT: u16 = 3001;

/// Default tracing filter when MAMACARE_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "mamacare_lib=info"
}

/// Get the application data directory
/// ~/MamaCare/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("MamaCare")
}

/// Path of the application database.
///
/// MAMACARE_DB overrides the default (the article service's
/// "connection string"); otherwise the DB lives in the app data dir.
pub fn app_db_path() -> PathBuf {
    match std::env::var("MAMACARE_DB") {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => app_data_dir().join("mamacare.db"),
    }
}

/// Port for the article listing service (MAMACARE_API_PORT, default 3001).
pub fn article_api_port() -> u16 {
    std::env::var("MAMACARE_API_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_ARTICLE_API_PORT)
}

/// Which chat backing store to use, chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatBackend {
    /// Hosted realtime store (subscription pushes inserted messages).
    Remote,
    /// Keyed local persistence, no push channel.
    Local,
}

/// MAMACARE_CHAT_STORE=remote enables the realtime store; anything
/// else falls back to local persistence.
pub fn chat_backend() -> ChatBackend {
    match std::env::var("MAMACARE_CHAT_STORE") {
        Ok(v) if v.eq_ignore_ascii_case("remote") => ChatBackend::Remote,
        _ => ChatBackend::Local,
    }
}
