//! Article API router.
//!
//! Returns a composable `Router` that can be mounted on any axum
//! server. CORS is permissive: the frontend may be served from the
//! Tauri webview origin or a dev server.

use std::path::PathBuf;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::ApiContext;

/// Build the article API router over the given database.
pub fn article_api_router(db_path: PathBuf) -> Router {
    let ctx = ApiContext::new(db_path);
    Router::new()
        .route("/", get(endpoints::health::check))
        .route("/api/articles", get(endpoints::articles::list))
        .with_state(ctx)
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    use crate::db::{self, repository};

    fn test_router() -> (tempfile::TempDir, Router) {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("articles.db");
        let conn = db::open_database(&db_path).unwrap();
        repository::insert_article(&conn, "Prenatal vitamins", "Folate matters early.").unwrap();
        repository::insert_article(&conn, "Hydration", "Drink through the day.").unwrap();
        (dir, article_api_router(db_path))
    }

    #[tokio::test]
    async fn root_reports_liveness() {
        let (_dir, router) = test_router();
        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"Mama Care backend is running!");
    }

    #[tokio::test]
    async fn articles_endpoint_lists_all_rows() {
        let (_dir, router) = test_router();
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/articles")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let articles: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0]["title"], "Hydration");
        assert!(articles[0]["id"].is_string());
        assert!(articles[1]["content"].is_string());
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let (_dir, router) = test_router();
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
