use std::str::FromStr;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::enums::Mood;
use crate::models::{CheckinEntry, StoredCheckin};

/// Persist a check-in for the given user and date.
///
/// One row per user per day: resubmitting on the same date replaces
/// the earlier snapshot.
pub fn upsert_checkin(
    conn: &Connection,
    user_email: &str,
    checkin_date: &str,
    entry: &CheckinEntry,
) -> Result<String, DatabaseError> {
    let existing: Option<String> = conn
        .query_row(
            "SELECT id FROM checkins WHERE user_email = ?1 AND checkin_date = ?2",
            params![user_email, checkin_date],
            |row| row.get(0),
        )
        .optional()?;

    let id = existing.unwrap_or_else(|| Uuid::new_v4().to_string());
    let symptoms = if entry.symptoms.is_empty() {
        None
    } else {
        Some(entry.symptoms.join(", "))
    };

    conn.execute(
        "INSERT INTO checkins (id, user_email, checkin_date, mood, energy_level,
             symptoms, water_intake, sleep_hours, notes, recorded_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
         ON CONFLICT (user_email, checkin_date) DO UPDATE SET
             mood = excluded.mood,
             energy_level = excluded.energy_level,
             symptoms = excluded.symptoms,
             water_intake = excluded.water_intake,
             sleep_hours = excluded.sleep_hours,
             notes = excluded.notes,
             recorded_at = excluded.recorded_at",
        params![
            id,
            user_email,
            checkin_date,
            entry.mood.as_str(),
            entry.energy_level as i32,
            symptoms,
            entry.water_intake as i32,
            entry.sleep_hours as f64,
            entry.notes,
            Utc::now().to_rfc3339(),
        ],
    )?;
    Ok(id)
}

/// Check-in history for one user, most recent day first.
pub fn list_checkins(
    conn: &Connection,
    user_email: &str,
) -> Result<Vec<StoredCheckin>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, user_email, checkin_date, mood, energy_level, symptoms,
                water_intake, sleep_hours, notes, recorded_at
         FROM checkins
         WHERE user_email = ?1
         ORDER BY checkin_date DESC",
    )?;

    let rows = stmt.query_map(params![user_email], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, i32>(4)?,
            row.get::<_, Option<String>>(5)?,
            row.get::<_, i32>(6)?,
            row.get::<_, f64>(7)?,
            row.get::<_, Option<String>>(8)?,
            row.get::<_, String>(9)?,
        ))
    })?;

    let mut checkins = Vec::new();
    for row in rows {
        let (id, email, date, mood, energy, symptoms, water, sleep, notes, recorded) = row?;
        checkins.push(StoredCheckin {
            id,
            user_email: email,
            checkin_date: date,
            mood: Mood::from_str(&mood)?,
            energy_level: energy as u8,
            symptoms: symptoms
                .map(|s| s.split(", ").map(str::to_string).collect())
                .unwrap_or_default(),
            water_intake: water as u8,
            sleep_hours: sleep as f32,
            notes,
            recorded_at: recorded,
        });
    }
    Ok(checkins)
}

/// Date of the most recent check-in for a user, if any.
pub fn last_checkin_date(
    conn: &Connection,
    user_email: &str,
) -> Result<Option<String>, DatabaseError> {
    let date = conn
        .query_row(
            "SELECT MAX(checkin_date) FROM checkins WHERE user_email = ?1",
            params![user_email],
            |row| row.get::<_, Option<String>>(0),
        )
        .optional()?
        .flatten();
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::open_memory_database;

    fn entry(mood: Mood, energy: u8) -> CheckinEntry {
        CheckinEntry {
            mood,
            energy_level: energy,
            symptoms: vec!["Nausea".into(), "Fatigue".into()],
            water_intake: 6,
            sleep_hours: 7.5,
            notes: Some("Feeling okay".into()),
        }
    }

    #[test]
    fn upsert_and_list_round_trip() {
        let conn = open_memory_database().unwrap();
        upsert_checkin(&conn, "rudo@example.com", "2025-06-01", &entry(Mood::Good, 7)).unwrap();

        let history = list_checkins(&conn, "rudo@example.com").unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].mood, Mood::Good);
        assert_eq!(history[0].symptoms, vec!["Nausea", "Fatigue"]);
        assert!((history[0].sleep_hours - 7.5).abs() < f32::EPSILON);
    }

    #[test]
    fn same_day_resubmission_overwrites() {
        let conn = open_memory_database().unwrap();
        let first =
            upsert_checkin(&conn, "rudo@example.com", "2025-06-01", &entry(Mood::Good, 7)).unwrap();
        let second =
            upsert_checkin(&conn, "rudo@example.com", "2025-06-01", &entry(Mood::Tired, 3))
                .unwrap();

        assert_eq!(first, second);
        let history = list_checkins(&conn, "rudo@example.com").unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].mood, Mood::Tired);
        assert_eq!(history[0].energy_level, 3);
    }

    #[test]
    fn history_is_per_user_and_date_ordered() {
        let conn = open_memory_database().unwrap();
        upsert_checkin(&conn, "rudo@example.com", "2025-06-01", &entry(Mood::Good, 7)).unwrap();
        upsert_checkin(&conn, "rudo@example.com", "2025-06-03", &entry(Mood::Great, 9)).unwrap();
        upsert_checkin(&conn, "chipo@example.com", "2025-06-02", &entry(Mood::Okay, 5)).unwrap();

        let history = list_checkins(&conn, "rudo@example.com").unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].checkin_date, "2025-06-03");
        assert_eq!(history[1].checkin_date, "2025-06-01");
    }

    #[test]
    fn empty_symptoms_stored_as_null() {
        let conn = open_memory_database().unwrap();
        let mut e = entry(Mood::Okay, 5);
        e.symptoms.clear();
        upsert_checkin(&conn, "rudo@example.com", "2025-06-01", &e).unwrap();

        let symptoms: Option<String> = conn
            .query_row("SELECT symptoms FROM checkins", [], |row| row.get(0))
            .unwrap();
        assert!(symptoms.is_none());

        let history = list_checkins(&conn, "rudo@example.com").unwrap();
        assert!(history[0].symptoms.is_empty());
    }

    #[test]
    fn last_checkin_date_tracks_max() {
        let conn = open_memory_database().unwrap();
        assert!(last_checkin_date(&conn, "rudo@example.com").unwrap().is_none());

        upsert_checkin(&conn, "rudo@example.com", "2025-06-01", &entry(Mood::Good, 7)).unwrap();
        upsert_checkin(&conn, "rudo@example.com", "2025-06-05", &entry(Mood::Good, 7)).unwrap();
        assert_eq!(
            last_checkin_date(&conn, "rudo@example.com").unwrap().as_deref(),
            Some("2025-06-05")
        );
    }
}
