//! Onboarding and session IPC commands.
//!
//! Thin wrappers over the `OnboardingFlow` state machine. Completion
//! writes the profile into the session store, caches patient signups
//! into the roster, and raises the welcome overlay; the frontend then
//! follows the returned role-based redirect after the overlay
//! dismisses.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tauri::State;

use crate::core_state::CoreState;
use crate::db::repository;
use crate::models::enums::{Role, Trimester};
use crate::models::UserProfile;
use crate::onboarding::{
    Completion, CredentialsForm, DoctorDetails, FlowState, PatientDetails,
};

/// Current flow position, rendered by the auth page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowView {
    pub state: FlowState,
    pub role: Option<Role>,
    pub welcome: Option<String>,
}

/// Returned when a step completes the flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionView {
    pub name: String,
    pub role: Role,
    pub redirect: String,
}

/// Result of a flow step: the new state plus, if the flow finished,
/// the completion payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthOutcome {
    pub state: FlowState,
    pub completion: Option<CompletionView>,
}

fn flow_view(state: &CoreState) -> Result<FlowView, String> {
    let flow = state.onboarding().map_err(|e| e.to_string())?;
    let welcome = state.welcome().map_err(|e| e.to_string())?.current();
    Ok(FlowView {
        state: flow.state(),
        role: flow.role(),
        welcome,
    })
}

/// Apply a completion: session write, roster cache, welcome overlay.
fn complete_login(state: &CoreState, completion: Completion) -> Result<CompletionView, String> {
    let profile = completion.profile;

    // Patient signups feed the doctor dashboard's roster cache.
    // Best-effort: a cache failure is logged, never surfaced.
    if profile.role == Role::Patient {
        match state.open_db() {
            Ok(conn) => {
                if let Err(e) = repository::upsert_patient(&conn, &profile) {
                    tracing::warn!(error = %e, "Roster cache update failed");
                }
            }
            Err(e) => tracing::warn!(error = %e, "Roster cache unavailable"),
        }
    }

    let view = CompletionView {
        name: profile.name.clone(),
        role: profile.role,
        redirect: completion.redirect,
    };

    state
        .write_session()
        .map_err(|e| e.to_string())?
        .login(profile);
    state
        .welcome()
        .map_err(|e| e.to_string())?
        .show(&view.name);

    Ok(view)
}

fn outcome(
    state: &CoreState,
    completion: Option<Completion>,
) -> Result<AuthOutcome, String> {
    let completion = completion
        .map(|c| complete_login(state, c))
        .transpose()?;
    let flow_state = state.onboarding().map_err(|e| e.to_string())?.state();
    Ok(AuthOutcome {
        state: flow_state,
        completion,
    })
}

// ═══════════════════════════════════════════
// IPC commands
// ═══════════════════════════════════════════

/// Pick the account type (patient or doctor).
#[tauri::command]
pub fn select_role(role: Role, state: State<'_, Arc<CoreState>>) -> Result<FlowView, String> {
    state
        .onboarding()
        .map_err(|e| e.to_string())?
        .select_role(role)
        .map_err(|e| e.to_string())?;
    flow_view(&state)
}

/// Submit the credentials form (sign-in or sign-up).
#[tauri::command]
pub async fn submit_credentials(
    form: CredentialsForm,
    state: State<'_, Arc<CoreState>>,
) -> Result<AuthOutcome, String> {
    let completion = state
        .onboarding()
        .map_err(|e| e.to_string())?
        .submit_credentials(form)
        .map_err(|e| e.to_string())?;
    outcome(&state, completion)
}

/// Submit the patient questionnaire.
#[tauri::command]
pub async fn submit_patient_details(
    details: PatientDetails,
    state: State<'_, Arc<CoreState>>,
) -> Result<AuthOutcome, String> {
    let completion = state
        .onboarding()
        .map_err(|e| e.to_string())?
        .submit_patient_details(details)
        .map_err(|e| e.to_string())?;
    outcome(&state, completion)
}

/// Submit the doctor questionnaire.
#[tauri::command]
pub async fn submit_doctor_details(
    details: DoctorDetails,
    state: State<'_, Arc<CoreState>>,
) -> Result<AuthOutcome, String> {
    let completion = state
        .onboarding()
        .map_err(|e| e.to_string())?
        .submit_doctor_details(details)
        .map_err(|e| e.to_string())?;
    outcome(&state, Some(completion))
}

/// Explicit trimester pick (patient signups with a week count).
#[tauri::command]
pub async fn select_trimester(
    trimester: Trimester,
    state: State<'_, Arc<CoreState>>,
) -> Result<AuthOutcome, String> {
    let completion = state
        .onboarding()
        .map_err(|e| e.to_string())?
        .select_trimester(trimester)
        .map_err(|e| e.to_string())?;
    outcome(&state, Some(completion))
}

/// Step back one flow step.
#[tauri::command]
pub fn onboarding_back(state: State<'_, Arc<CoreState>>) -> Result<FlowView, String> {
    state
        .onboarding()
        .map_err(|e| e.to_string())?
        .go_back()
        .map_err(|e| e.to_string())?;
    flow_view(&state)
}

/// Current flow position (page load / refresh).
#[tauri::command]
pub fn get_onboarding_state(state: State<'_, Arc<CoreState>>) -> Result<FlowView, String> {
    flow_view(&state)
}

/// Dismiss the welcome overlay early.
#[tauri::command]
pub fn dismiss_welcome(state: State<'_, Arc<CoreState>>) -> Result<(), String> {
    state.welcome().map_err(|e| e.to_string())?.dismiss();
    Ok(())
}

/// Profile of the signed-in user, if any.
#[tauri::command]
pub fn current_user(state: State<'_, Arc<CoreState>>) -> Result<Option<UserProfile>, String> {
    Ok(state
        .read_session()
        .map_err(|e| e.to_string())?
        .current()
        .cloned())
}

/// Clear the active session. Returns whether a session was cleared.
#[tauri::command]
pub fn logout(state: State<'_, Arc<CoreState>>) -> Result<bool, String> {
    let previous = state.write_session().map_err(|e| e.to_string())?.logout();
    state.welcome().map_err(|e| e.to_string())?.dismiss();
    Ok(previous.is_some())
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{ChatPanel, LocalStore};
    use crate::onboarding::AuthMode;

    fn test_state() -> (tempfile::TempDir, CoreState) {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("mamacare.db");
        let chat = ChatPanel::new(Arc::new(LocalStore::new(db_path.clone())));
        (dir, CoreState::with_parts(db_path, chat))
    }

    fn run_patient_signup(state: &CoreState, weeks: Option<u8>) -> Option<Completion> {
        let mut flow = state.onboarding().unwrap();
        flow.select_role(Role::Patient).unwrap();
        flow.submit_credentials(CredentialsForm {
            mode: AuthMode::SignUp,
            name: Some("Rudo".into()),
            email: "rudo@example.com".into(),
            password: "hunter2".into(),
        })
        .unwrap();
        flow.submit_patient_details(PatientDetails {
            weeks_pregnant: weeks,
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn completion_writes_session_and_roster() {
        let (_dir, state) = test_state();
        run_patient_signup(&state, Some(20));
        let completion = state
            .onboarding()
            .unwrap()
            .select_trimester(Trimester::Second)
            .unwrap();

        let view = complete_login(&state, completion).unwrap();
        assert_eq!(view.role, Role::Patient);
        assert_eq!(view.redirect, "/daily-checkin");

        let session = state.read_session().unwrap();
        assert!(session.is_authenticated());
        assert_eq!(
            session.current().unwrap().trimester,
            Some(Trimester::Second)
        );
        drop(session);

        // Patient landed in the roster cache.
        let conn = state.open_db().unwrap();
        let patients = repository::list_patients(&conn).unwrap();
        assert_eq!(patients.len(), 1);
        assert_eq!(patients[0].email, "rudo@example.com");

        // Welcome overlay is up.
        assert_eq!(
            state.welcome().unwrap().current().as_deref(),
            Some("Rudo")
        );
    }

    #[tokio::test]
    async fn doctor_completion_skips_roster() {
        let (_dir, state) = test_state();
        {
            let mut flow = state.onboarding().unwrap();
            flow.select_role(Role::Doctor).unwrap();
            flow.submit_credentials(CredentialsForm {
                mode: AuthMode::SignUp,
                name: Some("Dr. Tariro".into()),
                email: "tariro@example.com".into(),
                password: "hunter2".into(),
            })
            .unwrap();
        }
        let completion = state
            .onboarding()
            .unwrap()
            .submit_doctor_details(DoctorDetails {
                license_number: "MD-1".into(),
                specialization: "obstetrics".into(),
            })
            .unwrap();

        let view = complete_login(&state, completion).unwrap();
        assert_eq!(view.redirect, "/doctor-dashboard");

        let conn = state.open_db().unwrap();
        assert!(repository::list_patients(&conn).unwrap().is_empty());
    }

    #[tokio::test]
    async fn outcome_without_completion_reports_state_only() {
        let (_dir, state) = test_state();
        // Patient with weeks: stops at trimester selection.
        let completion = run_patient_signup(&state, Some(20));
        assert!(completion.is_none());

        let result = outcome(&state, completion).unwrap();
        assert_eq!(result.state, FlowState::TrimesterSelect);
        assert!(result.completion.is_none());
        assert!(!state.read_session().unwrap().is_authenticated());
    }
}
