//! `GET /api/articles` — the read-only article listing.
//!
//! Returns every stored article. No pagination, filtering, or write
//! endpoint exists; clients render the full list as cards.

use axum::extract::State;
use axum::Json;

use crate::api::{ApiContext, ApiError};
use crate::db::{self, repository};
use crate::models::RemoteArticle;

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<RemoteArticle>>, ApiError> {
    let conn = db::open_database(&ctx.db_path)?;
    let articles = repository::list_articles(&conn)?;
    Ok(Json(articles))
}
