//! Contact center IPC commands.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tauri::State;

use crate::chat::ChatError;
use crate::core_state::CoreState;
use crate::models::enums::Channel;
use crate::models::ChatMessage;

/// Sender name when no session is active (the contact center is not
/// a gated view).
const GUEST_SENDER: &str = "Guest";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatView {
    pub channel: Channel,
    pub messages: Vec<ChatMessage>,
}

/// Messages for the active channel, including any pushed inserts.
#[tauri::command]
pub fn get_messages(state: State<'_, Arc<CoreState>>) -> Result<ChatView, String> {
    let mut panel = state.chat().map_err(|e| e.to_string())?;
    let messages = panel.messages().map_err(|e| e.to_string())?.to_vec();
    Ok(ChatView {
        channel: panel.channel(),
        messages,
    })
}

/// Switch channel: discard, unsubscribe, reload, reseed if empty.
#[tauri::command]
pub fn switch_channel(
    channel: Channel,
    state: State<'_, Arc<CoreState>>,
) -> Result<ChatView, String> {
    let mut panel = state.chat().map_err(|e| e.to_string())?;
    panel.switch_channel(channel).map_err(|e| e.to_string())?;
    let messages = panel.messages().map_err(|e| e.to_string())?.to_vec();
    Ok(ChatView { channel, messages })
}

/// Send a message as the signed-in user (or "Guest").
///
/// Empty text is rejected. Store failures are not surfaced: the
/// message is already displayed locally.
#[tauri::command]
pub fn send_chat_message(
    text: String,
    state: State<'_, Arc<CoreState>>,
) -> Result<ChatMessage, String> {
    let (sender, sender_email) = {
        let session = state.read_session().map_err(|e| e.to_string())?;
        match session.current() {
            Some(profile) => (profile.name.clone(), Some(profile.email.clone())),
            None => (GUEST_SENDER.to_string(), None),
        }
    };

    let mut panel = state.chat().map_err(|e| e.to_string())?;
    panel
        .send_message(&text, &sender, sender_email)
        .map_err(|e| match e {
            ChatError::EmptyMessage => "Message text cannot be empty".to_string(),
            other => other.to_string(),
        })
}

/// Drop the panel's subscription when the view unmounts.
#[tauri::command]
pub fn teardown_chat(state: State<'_, Arc<CoreState>>) -> Result<(), String> {
    state.chat().map_err(|e| e.to_string())?.teardown();
    Ok(())
}
