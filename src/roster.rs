//! Doctor dashboard — read-only aggregation over the cached patient
//! roster.
//!
//! Partitions patients by trimester for the stat cards, enriches each
//! row with a recomputed progress percentage and the date of the last
//! check-in, and backs the single-selection detail panel. No write
//! path to patient records exists here.

use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::db::{repository, DatabaseError};
use crate::models::enums::Trimester;
use crate::models::PatientRecord;
use crate::progress;

/// Everything the dashboard renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    pub total_patients: usize,
    pub first_trimester: usize,
    pub second_trimester: usize,
    pub third_trimester: usize,
    pub patients: Vec<PatientRecord>,
}

/// Load the dashboard aggregation from the roster cache.
pub fn load_dashboard(conn: &Connection) -> Result<DashboardData, DatabaseError> {
    let patients: Vec<PatientRecord> = repository::list_patients(conn)?
        .into_iter()
        .map(|row| enrich(conn, row))
        .collect::<Result<_, _>>()?;

    let count_in = |t: Trimester| patients.iter().filter(|p| p.trimester == Some(t)).count();

    Ok(DashboardData {
        total_patients: patients.len(),
        first_trimester: count_in(Trimester::First),
        second_trimester: count_in(Trimester::Second),
        third_trimester: count_in(Trimester::Third),
        patients,
    })
}

/// Detail for the selected patient.
pub fn patient_detail(conn: &Connection, id: &str) -> Result<PatientRecord, DatabaseError> {
    let row = repository::get_patient(conn, id)?;
    enrich(conn, row)
}

fn enrich(
    conn: &Connection,
    row: repository::PatientRow,
) -> Result<PatientRecord, DatabaseError> {
    let last_checkin = repository::last_checkin_date(conn, &row.email)?;
    let percent = row
        .weeks_pregnant
        .map(progress::percent_complete)
        .unwrap_or(0.0);

    Ok(PatientRecord {
        id: row.id,
        name: row.name,
        email: row.email,
        weeks_pregnant: row.weeks_pregnant,
        trimester: row.trimester,
        due_date: row.due_date,
        last_checkin,
        progress: percent.round() as u8,
    })
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
