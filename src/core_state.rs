//! Shared application state.
//!
//! `CoreState` is the single state object managed by Tauri and shared
//! with the embedded article API server. The session store is the
//! only cross-view mutable state; it is written by the onboarding
//! flow and logout, and read by everything else (last-writer-wins).

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use crate::api::ArticleServer;
use crate::carousel::Carousel;
use crate::chat::{self, ChatPanel};
use crate::config;
use crate::db::{self, DatabaseError};
use crate::onboarding::{OnboardingFlow, WelcomeOverlay};
use crate::resources::ResourceViewer;
use crate::session::SessionStore;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("No active session")]
    NoActiveSession,

    #[error("State lock poisoned")]
    LockPoisoned,

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

pub struct CoreState {
    /// Active session. Read by every view, written only by the
    /// onboarding flow controller and logout.
    session: RwLock<SessionStore>,
    /// Onboarding flow state machine.
    onboarding: Mutex<OnboardingFlow>,
    /// Post-login welcome overlay with auto-dismiss timer.
    welcome: Mutex<WelcomeOverlay>,
    /// Chat panel for the contact center view.
    chat: Mutex<ChatPanel>,
    /// Resource modal viewer (one open modal at a time).
    viewer: Mutex<ResourceViewer>,
    /// Landing-page hero carousel.
    carousel: Mutex<Carousel>,
    /// Doctor dashboard detail-panel selection.
    selected_patient: Mutex<Option<String>>,
    /// Application database path.
    pub db_path: PathBuf,
    /// Article API server handle. Uses tokio Mutex for async.
    pub article_server: tokio::sync::Mutex<Option<ArticleServer>>,
}

impl CoreState {
    /// Create state with the configured database and chat backend.
    pub fn new() -> Self {
        let db_path = config::app_db_path();
        let store = chat::open_store(config::chat_backend(), db_path.clone());
        Self::with_parts(db_path, ChatPanel::new(store))
    }

    /// Create state over an explicit DB path and chat panel (tests).
    pub fn with_parts(db_path: PathBuf, chat: ChatPanel) -> Self {
        Self {
            session: RwLock::new(SessionStore::new()),
            onboarding: Mutex::new(OnboardingFlow::new()),
            welcome: Mutex::new(WelcomeOverlay::new()),
            chat: Mutex::new(chat),
            viewer: Mutex::new(ResourceViewer::new()),
            carousel: Mutex::new(Carousel::new()),
            selected_patient: Mutex::new(None),
            db_path,
            article_server: tokio::sync::Mutex::new(None),
        }
    }

    /// Open a database connection to the application database.
    pub fn open_db(&self) -> Result<rusqlite::Connection, CoreError> {
        db::open_database(&self.db_path).map_err(CoreError::Database)
    }

    // ── Lock accessors ──────────────────────────────────────

    pub fn read_session(&self) -> Result<RwLockReadGuard<'_, SessionStore>, CoreError> {
        self.session.read().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn write_session(&self) -> Result<RwLockWriteGuard<'_, SessionStore>, CoreError> {
        self.session.write().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn onboarding(&self) -> Result<MutexGuard<'_, OnboardingFlow>, CoreError> {
        self.onboarding.lock().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn welcome(&self) -> Result<MutexGuard<'_, WelcomeOverlay>, CoreError> {
        self.welcome.lock().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn chat(&self) -> Result<MutexGuard<'_, ChatPanel>, CoreError> {
        self.chat.lock().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn viewer(&self) -> Result<MutexGuard<'_, ResourceViewer>, CoreError> {
        self.viewer.lock().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn carousel(&self) -> Result<MutexGuard<'_, Carousel>, CoreError> {
        self.carousel.lock().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn selected_patient(&self) -> Result<MutexGuard<'_, Option<String>>, CoreError> {
        self.selected_patient
            .lock()
            .map_err(|_| CoreError::LockPoisoned)
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}
