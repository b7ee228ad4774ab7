//! Article listing service — an embedded axum HTTP server exposing
//! the read-only article API consumed by the resources page.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::article_api_router;
pub use server::{start_article_server, start_article_server_on, ArticleServer};

use std::path::PathBuf;
use std::sync::Arc;

/// Shared context for API handlers.
#[derive(Clone)]
pub struct ApiContext {
    pub db_path: Arc<PathBuf>,
}

impl ApiContext {
    pub fn new(db_path: PathBuf) -> Self {
        Self {
            db_path: Arc::new(db_path),
        }
    }
}
