//! Chat panel — in-memory message list for the active channel.
//!
//! Channel switches discard the list, drop the previous subscription
//! (listeners must never leak across switches), reload from the
//! backing store, and seed a fixed welcome message when the channel
//! is empty. Sends are optimistic: the message appears locally even
//! if the write-through fails (failures are logged, not surfaced).

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::broadcast;

use crate::chat::store::MessageStore;
use crate::db::DatabaseError;
use crate::models::enums::Channel;
use crate::models::ChatMessage;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Message text cannot be empty")]
    EmptyMessage,

    #[error(transparent)]
    Store(#[from] DatabaseError),
}

/// Fixed welcome message shown when a channel has no history.
pub fn seed_message(channel: Channel) -> ChatMessage {
    match channel {
        Channel::Doctor => ChatMessage::new(
            "Good morning! This is Dr. Moyo. How can I assist you today?",
            "Dr. Moyo",
            Channel::Doctor,
            None,
        ),
        Channel::Moms => ChatMessage::new(
            "Welcome to the moms community! Introduce yourself and share how your week is going.",
            "Mama Care",
            Channel::Moms,
            None,
        ),
    }
}

pub struct ChatPanel {
    store: Arc<dyn MessageStore>,
    channel: Channel,
    messages: Vec<ChatMessage>,
    incoming: Option<broadcast::Receiver<ChatMessage>>,
    loaded: bool,
}

impl ChatPanel {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self {
            store,
            channel: Channel::Doctor,
            messages: Vec::new(),
            incoming: None,
            loaded: false,
        }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Switch to a channel: discard the in-memory list, drop the old
    /// subscription, reload from the store, seed if empty.
    pub fn switch_channel(&mut self, channel: Channel) -> Result<(), ChatError> {
        self.incoming = None;
        self.channel = channel;
        self.messages = self.store.load(channel)?;
        if self.messages.is_empty() {
            self.messages.push(seed_message(channel));
        }
        self.incoming = self.store.subscribe();
        self.loaded = true;
        Ok(())
    }

    /// Current message list, loading the initial channel on first use.
    pub fn messages(&mut self) -> Result<&[ChatMessage], ChatError> {
        if !self.loaded {
            self.switch_channel(self.channel)?;
        }
        self.drain_incoming();
        Ok(&self.messages)
    }

    /// Send a message as the given sender.
    ///
    /// Whitespace-only text is rejected. The message is appended
    /// locally first; the store write is best-effort and a failure
    /// does not roll the local append back.
    pub fn send_message(
        &mut self,
        text: &str,
        sender: &str,
        sender_email: Option<String>,
    ) -> Result<ChatMessage, ChatError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if !self.loaded {
            self.switch_channel(self.channel)?;
        }

        let message = ChatMessage::new(text, sender, self.channel, sender_email);
        self.messages.push(message.clone());

        if let Err(e) = self.store.append(&message) {
            tracing::warn!(error = %e, "Chat write-through failed; keeping local message");
        }
        Ok(message)
    }

    /// Merge pushed inserts for the active channel into the list.
    ///
    /// Echoes of our own optimistic appends are correlated by id and
    /// discarded instead of duplicating the entry.
    pub fn drain_incoming(&mut self) {
        let Some(rx) = self.incoming.as_mut() else {
            return;
        };
        loop {
            match rx.try_recv() {
                Ok(message) => {
                    if message.channel == self.channel
                        && !self.messages.iter().any(|m| m.id == message.id)
                    {
                        self.messages.push(message);
                    }
                }
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Chat subscription lagged; dropping old pushes");
                }
                Err(_) => break,
            }
        }
    }

    /// Drop the subscription when the view is torn down.
    pub fn teardown(&mut self) {
        self.incoming = None;
    }
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
