//! Article service lifecycle IPC commands.

use std::sync::Arc;

use tauri::State;

use crate::api::server::{start_article_server, ArticleServerStatus};
use crate::config;
use crate::core_state::CoreState;

/// Start the article listing service on the configured port.
/// Starting twice is a no-op that reports the running session.
#[tauri::command]
pub async fn start_article_service(
    state: State<'_, Arc<CoreState>>,
) -> Result<ArticleServerStatus, String> {
    let mut slot = state.article_server.lock().await;
    if let Some(server) = slot.as_ref() {
        return Ok(ArticleServerStatus {
            running: true,
            session: Some(server.session.clone()),
        });
    }

    let server = start_article_server(state.db_path.clone(), config::article_api_port()).await?;
    let session = server.session.clone();
    *slot = Some(server);

    Ok(ArticleServerStatus {
        running: true,
        session: Some(session),
    })
}

/// Stop the article listing service if it is running.
#[tauri::command]
pub async fn stop_article_service(
    state: State<'_, Arc<CoreState>>,
) -> Result<ArticleServerStatus, String> {
    let mut slot = state.article_server.lock().await;
    if let Some(mut server) = slot.take() {
        server.shutdown();
    }
    Ok(ArticleServerStatus {
        running: false,
        session: None,
    })
}

/// Whether the service is running, and where.
#[tauri::command]
pub async fn get_article_service_status(
    state: State<'_, Arc<CoreState>>,
) -> Result<ArticleServerStatus, String> {
    let slot = state.article_server.lock().await;
    Ok(ArticleServerStatus {
        running: slot.is_some(),
        session: slot.as_ref().map(|s| s.session.clone()),
    })
}
