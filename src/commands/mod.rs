pub mod articles_api;
pub mod auth;
pub mod checkin;
pub mod chat;
pub mod landing;
pub mod progress;
pub mod resources;
pub mod roster;

use serde::{Deserialize, Serialize};

use crate::config;

/// Health check IPC command — verifies backend is running
#[tauri::command]
pub fn health_check() -> String {
    tracing::debug!("Health check called");
    "ok".to_string()
}

/// Name and version for the frontend's about panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
}

#[tauri::command]
pub fn get_app_info() -> AppInfo {
    AppInfo {
        name: config::APP_NAME.to_string(),
        version: config::APP_VERSION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_check_reports_ok() {
        assert_eq!(health_check(), "ok");
    }

    #[test]
    fn app_info_matches_config() {
        let info = get_app_info();
        assert_eq!(info.name, "Mama Care");
        assert_eq!(info.version, config::APP_VERSION);
    }
}
