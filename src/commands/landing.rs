//! Landing-page IPC commands — hero carousel lifecycle.
//!
//! The rotation timer starts when the landing view mounts and must
//! be stopped when it unmounts, so a navigated-away view never keeps
//! a ticking timer alive.

use std::sync::Arc;

use tauri::State;

use crate::carousel::CarouselState;
use crate::core_state::CoreState;

/// Current carousel state (images, index, rotation flag).
#[tauri::command]
pub fn get_carousel(state: State<'_, Arc<CoreState>>) -> Result<CarouselState, String> {
    Ok(state.carousel().map_err(|e| e.to_string())?.state())
}

/// Start rotating (landing view mounted).
#[tauri::command]
pub async fn start_carousel(state: State<'_, Arc<CoreState>>) -> Result<CarouselState, String> {
    let mut carousel = state.carousel().map_err(|e| e.to_string())?;
    carousel.start_rotation();
    Ok(carousel.state())
}

/// Stop rotating (landing view unmounted).
#[tauri::command]
pub fn stop_carousel(state: State<'_, Arc<CoreState>>) -> Result<CarouselState, String> {
    let mut carousel = state.carousel().map_err(|e| e.to_string())?;
    carousel.stop_rotation();
    Ok(carousel.state())
}

/// Manual advance (arrow buttons).
#[tauri::command]
pub fn advance_carousel(state: State<'_, Arc<CoreState>>) -> Result<CarouselState, String> {
    let carousel = state.carousel().map_err(|e| e.to_string())?;
    carousel.advance();
    Ok(carousel.state())
}
