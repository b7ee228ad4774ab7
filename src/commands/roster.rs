//! Doctor dashboard IPC commands.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tauri::State;

use crate::core_state::CoreState;
use crate::models::enums::Role;
use crate::models::PatientRecord;
use crate::roster::{self, DashboardData};

/// What the dashboard should render. Unauthenticated visitors and
/// non-doctors get a sign-in redirect, never a hard error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DashboardResponse {
    SignInRequired { target: String },
    Ready { data: DashboardData },
}

fn require_doctor(state: &CoreState) -> Result<bool, String> {
    let session = state.read_session().map_err(|e| e.to_string())?;
    Ok(session.role() == Some(Role::Doctor))
}

/// Roster aggregation for the doctor dashboard.
#[tauri::command]
pub fn get_doctor_dashboard(
    state: State<'_, Arc<CoreState>>,
) -> Result<DashboardResponse, String> {
    if !require_doctor(&state)? {
        return Ok(DashboardResponse::SignInRequired {
            target: "/auth".to_string(),
        });
    }

    let conn = state.open_db().map_err(|e| e.to_string())?;
    let data = roster::load_dashboard(&conn).map_err(|e| e.to_string())?;
    Ok(DashboardResponse::Ready { data })
}

/// Select a patient for the detail panel (single selection).
#[tauri::command]
pub fn select_patient(
    patient_id: String,
    state: State<'_, Arc<CoreState>>,
) -> Result<PatientRecord, String> {
    if patient_id.trim().is_empty() {
        return Err("Patient ID is required".into());
    }
    let conn = state.open_db().map_err(|e| e.to_string())?;
    let record = roster::patient_detail(&conn, &patient_id).map_err(|e| e.to_string())?;

    *state.selected_patient().map_err(|e| e.to_string())? = Some(patient_id);
    Ok(record)
}

/// Close the detail panel.
#[tauri::command]
pub fn clear_patient_selection(state: State<'_, Arc<CoreState>>) -> Result<(), String> {
    *state.selected_patient().map_err(|e| e.to_string())? = None;
    Ok(())
}

/// Currently selected patient, if the detail panel is open.
#[tauri::command]
pub fn get_selected_patient(
    state: State<'_, Arc<CoreState>>,
) -> Result<Option<PatientRecord>, String> {
    let selected = state.selected_patient().map_err(|e| e.to_string())?.clone();
    let Some(id) = selected else {
        return Ok(None);
    };
    let conn = state.open_db().map_err(|e| e.to_string())?;
    roster::patient_detail(&conn, &id)
        .map(Some)
        .map_err(|e| e.to_string())
}
