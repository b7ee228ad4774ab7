use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::enums::Channel;
use crate::models::ChatMessage;

/// Append a message to its channel's log.
pub fn insert_message(conn: &Connection, message: &ChatMessage) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO messages (id, channel, sender, sender_email, text, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            message.id.to_string(),
            message.channel.as_str(),
            message.sender,
            message.sender_email,
            message.text,
            message.created_at,
        ],
    )?;
    Ok(())
}

/// All messages for one channel, creation-time ascending.
pub fn list_messages(conn: &Connection, channel: Channel) -> Result<Vec<ChatMessage>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, sender, sender_email, text, created_at
         FROM messages
         WHERE channel = ?1
         ORDER BY created_at ASC",
    )?;

    let rows = stmt.query_map(params![channel.as_str()], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, Option<String>>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut messages = Vec::new();
    for row in rows {
        let (id, sender, sender_email, text, created_at) = row?;
        messages.push(ChatMessage {
            id: Uuid::parse_str(&id)
                .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
            text,
            sender,
            channel,
            created_at,
            sender_email,
        });
    }
    Ok(messages)
}
