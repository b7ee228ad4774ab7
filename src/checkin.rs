//! Daily check-in — backend types and repository wrappers.
//!
//! The check-in form collects mood, energy, symptoms, hydration, and
//! sleep into a single daily snapshot, persisted keyed by user+date.

use chrono::Local;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::db::{repository, DatabaseError};
use crate::models::enums::Mood;
use crate::models::{CheckinEntry, StoredCheckin};

// ═══════════════════════════════════════════
// Constants — form bounds and fixed choice lists
// ═══════════════════════════════════════════

pub const MAX_ENERGY_LEVEL: u8 = 10;
pub const MAX_WATER_GLASSES: u8 = 12;
pub const MAX_SLEEP_HOURS: f32 = 12.0;
pub const MAX_NOTES_LEN: usize = 1000;

pub const COMMON_SYMPTOMS: &[&str] = &[
    "Nausea",
    "Back pain",
    "Headache",
    "Fatigue",
    "Heartburn",
    "Swelling",
    "Cramps",
    "Braxton Hicks",
];

pub const MOODS: &[Mood] = &[Mood::Great, Mood::Good, Mood::Okay, Mood::Tired, Mood::Unwell];

// ═══════════════════════════════════════════
// View types — serialised to frontend
// ═══════════════════════════════════════════

/// Static form configuration for the check-in page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckinOptions {
    pub moods: Vec<Mood>,
    pub common_symptoms: Vec<String>,
    pub max_energy_level: u8,
    pub max_water_glasses: u8,
    pub max_sleep_hours: f32,
}

/// Result of a check-in submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResult {
    pub checkin_id: String,
    pub checkin_date: String,
}

pub fn checkin_options() -> CheckinOptions {
    CheckinOptions {
        moods: MOODS.to_vec(),
        common_symptoms: COMMON_SYMPTOMS.iter().map(|s| s.to_string()).collect(),
        max_energy_level: MAX_ENERGY_LEVEL,
        max_water_glasses: MAX_WATER_GLASSES,
        max_sleep_hours: MAX_SLEEP_HOURS,
    }
}

// ═══════════════════════════════════════════
// Validation
// ═══════════════════════════════════════════

/// Check form bounds before anything touches the database.
pub fn validate_entry(entry: &CheckinEntry) -> Result<(), String> {
    if entry.energy_level > MAX_ENERGY_LEVEL {
        return Err(format!("Energy level must be between 0 and {MAX_ENERGY_LEVEL}"));
    }
    if entry.water_intake > MAX_WATER_GLASSES {
        return Err(format!("Water intake must be between 0 and {MAX_WATER_GLASSES} glasses"));
    }
    if !(0.0..=MAX_SLEEP_HOURS).contains(&entry.sleep_hours) {
        return Err(format!("Sleep hours must be between 0 and {MAX_SLEEP_HOURS}"));
    }
    // Slider moves in half-hour steps
    if (entry.sleep_hours * 2.0).fract() != 0.0 {
        return Err("Sleep hours must be in half-hour steps".into());
    }
    if let Some(ref notes) = entry.notes {
        if notes.len() > MAX_NOTES_LEN {
            return Err(format!("Notes must be {MAX_NOTES_LEN} characters or fewer"));
        }
    }
    if entry.symptoms.iter().any(|s| s.trim().is_empty()) {
        return Err("Symptoms cannot be blank".into());
    }
    Ok(())
}

// ═══════════════════════════════════════════
// Repository wrappers
// ═══════════════════════════════════════════

/// Persist today's check-in for a user. Same-day resubmission
/// replaces the earlier snapshot.
pub fn submit(
    conn: &Connection,
    user_email: &str,
    entry: &CheckinEntry,
) -> Result<SubmitResult, DatabaseError> {
    let today = Local::now().date_naive().to_string();
    let id = repository::upsert_checkin(conn, user_email, &today, entry)?;
    Ok(SubmitResult {
        checkin_id: id,
        checkin_date: today,
    })
}

/// Check-in history for one user, most recent first.
pub fn history(conn: &Connection, user_email: &str) -> Result<Vec<StoredCheckin>, DatabaseError> {
    repository::list_checkins(conn, user_email)
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
