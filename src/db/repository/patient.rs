use std::str::FromStr;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::enums::Trimester;
use crate::models::UserProfile;

/// A raw roster row, before dashboard-level enrichment (progress
/// percentage, last check-in) is applied.
#[derive(Debug, Clone)]
pub struct PatientRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub weeks_pregnant: Option<u8>,
    pub trimester: Option<Trimester>,
    pub due_date: Option<String>,
}

/// Upsert a patient signup into the roster, keyed by email.
///
/// Re-signing up with the same email refreshes the cached fields
/// instead of producing a duplicate roster entry.
pub fn upsert_patient(conn: &Connection, profile: &UserProfile) -> Result<String, DatabaseError> {
    let existing: Option<String> = conn
        .query_row(
            "SELECT id FROM patients WHERE email = ?1",
            params![profile.email],
            |row| row.get(0),
        )
        .optional()?;

    let id = existing.unwrap_or_else(|| Uuid::new_v4().to_string());
    conn.execute(
        "INSERT INTO patients (id, name, email, weeks_pregnant, trimester, due_date, registered_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT (email) DO UPDATE SET
             name = excluded.name,
             weeks_pregnant = excluded.weeks_pregnant,
             trimester = excluded.trimester,
             due_date = excluded.due_date",
        params![
            id,
            profile.name,
            profile.email,
            profile.weeks_pregnant.map(|w| w as i32),
            profile.trimester.map(|t| t.as_str()),
            profile.due_date,
            Utc::now().to_rfc3339(),
        ],
    )?;
    Ok(id)
}

/// All roster rows, most recently registered first.
pub fn list_patients(conn: &Connection) -> Result<Vec<PatientRow>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, email, weeks_pregnant, trimester, due_date
         FROM patients
         ORDER BY registered_at DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, Option<i32>>(3)?,
            row.get::<_, Option<String>>(4)?,
            row.get::<_, Option<String>>(5)?,
        ))
    })?;

    let mut patients = Vec::new();
    for row in rows {
        let (id, name, email, weeks, trimester, due_date) = row?;
        patients.push(PatientRow {
            id,
            name,
            email,
            weeks_pregnant: weeks.map(|w| w as u8),
            trimester: trimester.map(|t| Trimester::from_str(&t)).transpose()?,
            due_date,
        });
    }
    Ok(patients)
}

/// Fetch a single roster row by id.
pub fn get_patient(conn: &Connection, id: &str) -> Result<PatientRow, DatabaseError> {
    let row = conn
        .query_row(
            "SELECT id, name, email, weeks_pregnant, trimester, due_date
             FROM patients WHERE id = ?1",
            params![id],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, Option<i32>>(3)?,
                    row.get::<_, Option<String>>(4)?,
                    row.get::<_, Option<String>>(5)?,
                ))
            },
        )
        .optional()?;

    let (id, name, email, weeks, trimester, due_date) =
        row.ok_or_else(|| DatabaseError::NotFound {
            entity_type: "Patient".into(),
            id: id.into(),
        })?;

    Ok(PatientRow {
        id,
        name,
        email,
        weeks_pregnant: weeks.map(|w| w as u8),
        trimester: trimester.map(|t| Trimester::from_str(&t)).transpose()?,
        due_date,
    })
}
