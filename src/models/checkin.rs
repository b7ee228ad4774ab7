use serde::{Deserialize, Serialize};

use super::enums::Mood;

/// A daily wellness snapshot as submitted from the check-in form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckinEntry {
    pub mood: Mood,
    pub energy_level: u8,     // 0-10
    pub symptoms: Vec<String>,
    pub water_intake: u8,     // glasses, 0-12
    pub sleep_hours: f32,     // 0.0-12.0, half-hour steps
    pub notes: Option<String>,
}

/// A stored check-in, keyed by (user_email, checkin_date).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredCheckin {
    pub id: String,
    pub user_email: String,
    pub checkin_date: String, // YYYY-MM-DD
    pub mood: Mood,
    pub energy_level: u8,
    pub symptoms: Vec<String>,
    pub water_intake: u8,
    pub sleep_hours: f32,
    pub notes: Option<String>,
    pub recorded_at: String,
}
