//! Article API server lifecycle — starts/stops the axum HTTP server
//! that serves the article listing.
//!
//! Pattern: bind → seed store if empty → spawn background task →
//! return a handle with a shutdown channel. The handle lives in
//! `CoreState` so IPC commands can stop the server or report status.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

use crate::api::router::article_api_router;
use crate::db::{self, repository, DatabaseError};
use crate::resources;

/// Metadata for a running article server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleServerSession {
    pub server_addr: String,
    pub port: u16,
    pub started_at: String,
}

/// Status returned by `get_article_service_status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleServerStatus {
    pub running: bool,
    pub session: Option<ArticleServerSession>,
}

/// Handle to a running article server. Stored in `CoreState`.
pub struct ArticleServer {
    pub session: ArticleServerSession,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ArticleServer {
    /// Shut down the server gracefully.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("Article server shutdown signal sent");
        }
    }
}

/// Seed the article store with the bundled catalog (English text)
/// when it is empty, so the listing is never bare on first run.
pub fn seed_articles_if_empty(db_path: &Path) -> Result<(), DatabaseError> {
    let conn = db::open_database(db_path)?;
    if repository::count_articles(&conn)? > 0 {
        return Ok(());
    }
    for article in resources::articles() {
        repository::insert_article(&conn, &article.title, &article.content.en)?;
    }
    tracing::info!("Seeded article store from bundled catalog");
    Ok(())
}

/// Start the article server on the configured port (localhost only).
pub async fn start_article_server(
    db_path: PathBuf,
    port: u16,
) -> Result<ArticleServer, String> {
    start_article_server_on(db_path, SocketAddr::from(([127, 0, 0, 1], port))).await
}

/// Start the article server on a specific address.
///
/// Factored out from `start_article_server` so tests can bind port 0.
pub async fn start_article_server_on(
    db_path: PathBuf,
    addr: SocketAddr,
) -> Result<ArticleServer, String> {
    seed_articles_if_empty(&db_path).map_err(|e| format!("Cannot seed article store: {e}"))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind article server: {e}"))?;
    let addr = listener
        .local_addr()
        .map_err(|e| format!("Failed to get server address: {e}"))?;

    let app = article_api_router(db_path);

    let session = ArticleServerSession {
        server_addr: addr.to_string(),
        port: addr.port(),
        started_at: chrono::Utc::now().to_rfc3339(),
    };

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("Article server received shutdown signal");
        };

        tracing::info!(%addr, "Article server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("Article server error: {e}");
        }

        tracing::info!("Article server stopped");
    });

    Ok(ArticleServer {
        session,
        shutdown_tx: Some(shutdown_tx),
    })
}
