//! Daily check-in IPC commands.

use std::sync::Arc;

use tauri::State;

use crate::checkin::{self, CheckinOptions, SubmitResult};
use crate::core_state::CoreState;
use crate::models::{CheckinEntry, StoredCheckin};

/// Email of the signed-in user, or a sign-in prompt.
fn session_email(state: &CoreState) -> Result<String, String> {
    state
        .read_session()
        .map_err(|e| e.to_string())?
        .current()
        .map(|p| p.email.clone())
        .ok_or_else(|| "Sign in to save your daily check-in".to_string())
}

/// Save today's check-in for the signed-in user.
#[tauri::command]
pub fn submit_checkin(
    entry: CheckinEntry,
    state: State<'_, Arc<CoreState>>,
) -> Result<SubmitResult, String> {
    checkin::validate_entry(&entry)?;
    let email = session_email(&state)?;

    let conn = state.open_db().map_err(|e| e.to_string())?;
    checkin::submit(&conn, &email, &entry).map_err(|e| e.to_string())
}

/// Check-in history for the signed-in user, most recent first.
#[tauri::command]
pub fn get_checkin_history(
    state: State<'_, Arc<CoreState>>,
) -> Result<Vec<StoredCheckin>, String> {
    let email = session_email(&state)?;
    let conn = state.open_db().map_err(|e| e.to_string())?;
    checkin::history(&conn, &email).map_err(|e| e.to_string())
}

/// Static form configuration (moods, symptom list, slider bounds).
#[tauri::command]
pub fn get_checkin_options() -> CheckinOptions {
    checkin::checkin_options()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{ChatPanel, LocalStore};
    use crate::models::enums::{Mood, Role};
    use crate::models::UserProfile;

    fn test_state() -> (tempfile::TempDir, CoreState) {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("mamacare.db");
        let chat = ChatPanel::new(Arc::new(LocalStore::new(db_path.clone())));
        (dir, CoreState::with_parts(db_path, chat))
    }

    #[test]
    fn session_email_requires_signin() {
        let (_dir, state) = test_state();
        assert!(session_email(&state).is_err());

        state.write_session().unwrap().login(UserProfile::bare(
            "Rudo".into(),
            "rudo@example.com".into(),
            Role::Patient,
        ));
        assert_eq!(session_email(&state).unwrap(), "rudo@example.com");
    }

    #[test]
    fn submit_flow_persists_for_session_user() {
        let (_dir, state) = test_state();
        state.write_session().unwrap().login(UserProfile::bare(
            "Rudo".into(),
            "rudo@example.com".into(),
            Role::Patient,
        ));

        let entry = CheckinEntry {
            mood: Mood::Good,
            energy_level: 6,
            symptoms: vec!["Fatigue".into()],
            water_intake: 5,
            sleep_hours: 7.5,
            notes: None,
        };
        checkin::validate_entry(&entry).unwrap();

        let email = session_email(&state).unwrap();
        let conn = state.open_db().unwrap();
        let result = checkin::submit(&conn, &email, &entry).unwrap();

        let history = checkin::history(&conn, &email).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, result.checkin_id);
    }
}
