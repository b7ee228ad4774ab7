//! Message backing stores.
//!
//! The chat panel depends only on the `MessageStore` trait. Two
//! implementations exist, chosen once at startup:
//!
//! - `LocalStore` — keyed local persistence, no push channel.
//! - `RemoteStore` — stand-in for the hosted realtime datastore:
//!   persists like the local store and additionally pushes every
//!   inserted row to subscribers, so the panel sees inserts made by
//!   other sessions (and the echo of its own writes).

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::broadcast;

use crate::config::ChatBackend;
use crate::db::{self, repository, DatabaseError};
use crate::models::enums::Channel;
use crate::models::ChatMessage;

/// Capacity of the realtime push bus. Lagging subscribers drop the
/// oldest pushes rather than blocking writers.
const PUSH_BUS_CAPACITY: usize = 256;

pub trait MessageStore: Send + Sync {
    /// All messages for a channel, arrival order.
    fn load(&self, channel: Channel) -> Result<Vec<ChatMessage>, DatabaseError>;

    /// Append one message to a channel's log.
    fn append(&self, message: &ChatMessage) -> Result<(), DatabaseError>;

    /// Subscribe to pushed inserts, if this store supports them.
    /// The receiver sees inserts for all channels; callers filter.
    fn subscribe(&self) -> Option<broadcast::Receiver<ChatMessage>>;
}

/// Build the store selected by configuration.
pub fn open_store(backend: ChatBackend, db_path: PathBuf) -> Arc<dyn MessageStore> {
    match backend {
        ChatBackend::Remote => {
            tracing::info!("Chat backed by realtime store");
            Arc::new(RemoteStore::new(db_path))
        }
        ChatBackend::Local => {
            tracing::info!("Chat backed by local store");
            Arc::new(LocalStore::new(db_path))
        }
    }
}

// ═══════════════════════════════════════════
// LocalStore
// ═══════════════════════════════════════════

pub struct LocalStore {
    db_path: PathBuf,
}

impl LocalStore {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

impl MessageStore for LocalStore {
    fn load(&self, channel: Channel) -> Result<Vec<ChatMessage>, DatabaseError> {
        let conn = db::open_database(&self.db_path)?;
        repository::list_messages(&conn, channel)
    }

    fn append(&self, message: &ChatMessage) -> Result<(), DatabaseError> {
        let conn = db::open_database(&self.db_path)?;
        repository::insert_message(&conn, message)
    }

    fn subscribe(&self) -> Option<broadcast::Receiver<ChatMessage>> {
        None
    }
}

// ═══════════════════════════════════════════
// RemoteStore
// ═══════════════════════════════════════════

pub struct RemoteStore {
    db_path: PathBuf,
    bus: broadcast::Sender<ChatMessage>,
}

impl RemoteStore {
    pub fn new(db_path: PathBuf) -> Self {
        let (bus, _) = broadcast::channel(PUSH_BUS_CAPACITY);
        Self { db_path, bus }
    }
}

impl MessageStore for RemoteStore {
    fn load(&self, channel: Channel) -> Result<Vec<ChatMessage>, DatabaseError> {
        let conn = db::open_database(&self.db_path)?;
        repository::list_messages(&conn, channel)
    }

    fn append(&self, message: &ChatMessage) -> Result<(), DatabaseError> {
        let conn = db::open_database(&self.db_path)?;
        repository::insert_message(&conn, message)?;
        // Push to subscribers; no receivers is not an error.
        let _ = self.bus.send(message.clone());
        Ok(())
    }

    fn subscribe(&self) -> Option<broadcast::Receiver<ChatMessage>> {
        Some(self.bus.subscribe())
    }
}
