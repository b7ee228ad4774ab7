//! Resource catalog and modal viewer IPC commands.

use std::sync::Arc;

use tauri::State;

use crate::config;
use crate::core_state::CoreState;
use crate::models::enums::Locale;
use crate::models::RemoteArticle;
use crate::resources::{self, ResourceCatalog, ResourceView};

/// The full static catalog for the resources page.
#[tauri::command]
pub fn get_resource_catalog() -> ResourceCatalog {
    resources::catalog()
}

/// Open an article modal by catalog index.
#[tauri::command]
pub fn open_article(
    index: usize,
    state: State<'_, Arc<CoreState>>,
) -> Result<ResourceView, String> {
    let mut viewer = state.viewer().map_err(|e| e.to_string())?;
    viewer.open_article(index).map_err(|e| e.to_string())?;
    viewer.view().ok_or_else(|| "No resource open".to_string())
}

/// Open a video modal by catalog index.
#[tauri::command]
pub fn open_video(
    index: usize,
    state: State<'_, Arc<CoreState>>,
) -> Result<ResourceView, String> {
    let mut viewer = state.viewer().map_err(|e| e.to_string())?;
    viewer.open_video(index).map_err(|e| e.to_string())?;
    viewer.view().ok_or_else(|| "No resource open".to_string())
}

/// Open a website modal by catalog index.
#[tauri::command]
pub fn open_website(
    index: usize,
    state: State<'_, Arc<CoreState>>,
) -> Result<ResourceView, String> {
    let mut viewer = state.viewer().map_err(|e| e.to_string())?;
    viewer.open_website(index).map_err(|e| e.to_string())?;
    viewer.view().ok_or_else(|| "No resource open".to_string())
}

/// Close the open modal and clear the selection.
#[tauri::command]
pub fn close_resource(state: State<'_, Arc<CoreState>>) -> Result<(), String> {
    state.viewer().map_err(|e| e.to_string())?.close();
    Ok(())
}

/// Switch the reading locale of the open article.
#[tauri::command]
pub fn set_article_locale(
    locale: Locale,
    state: State<'_, Arc<CoreState>>,
) -> Result<ResourceView, String> {
    let mut viewer = state.viewer().map_err(|e| e.to_string())?;
    viewer.set_locale(locale).map_err(|e| e.to_string())?;
    viewer.view().ok_or_else(|| "No resource open".to_string())
}

/// Content of the open modal, if any.
#[tauri::command]
pub fn get_open_resource(
    state: State<'_, Arc<CoreState>>,
) -> Result<Option<ResourceView>, String> {
    Ok(state.viewer().map_err(|e| e.to_string())?.view())
}

/// Best-effort fetch of additional articles from the companion
/// listing service. Failures are logged and an empty list returned;
/// the page renders the bundled catalog regardless.
#[tauri::command]
pub async fn fetch_remote_articles() -> Vec<RemoteArticle> {
    let url = format!(
        "http://127.0.0.1:{}/api/articles",
        config::article_api_port()
    );
    match fetch_articles_from(&url).await {
        Ok(articles) => articles,
        Err(e) => {
            tracing::warn!(error = %e, "Remote article fetch failed");
            Vec::new()
        }
    }
}

async fn fetch_articles_from(url: &str) -> Result<Vec<RemoteArticle>, reqwest::Error> {
    reqwest::get(url).await?.json().await
}
