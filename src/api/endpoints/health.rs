//! Liveness check for the article service.

/// `GET /` — plain-text liveness response.
pub async fn check() -> &'static str {
    "Mama Care backend is running!"
}
