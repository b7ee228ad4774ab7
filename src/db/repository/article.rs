use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::RemoteArticle;

/// Insert an article into the listing store.
pub fn insert_article(
    conn: &Connection,
    title: &str,
    content: &str,
) -> Result<String, DatabaseError> {
    let id = Uuid::new_v4().to_string();
    conn.execute(
        "INSERT INTO articles (id, title, content) VALUES (?1, ?2, ?3)",
        params![id, title, content],
    )?;
    Ok(id)
}

/// All stored articles. The listing API has no pagination or filters.
pub fn list_articles(conn: &Connection) -> Result<Vec<RemoteArticle>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT id, title, content FROM articles ORDER BY title ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(RemoteArticle {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
        })
    })?;

    let mut articles = Vec::new();
    for row in rows {
        articles.push(row?);
    }
    Ok(articles)
}

/// Number of stored articles.
pub fn count_articles(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM articles", [], |row| row.get(0))?;
    Ok(count)
}
