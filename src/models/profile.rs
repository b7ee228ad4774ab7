use serde::{Deserialize, Serialize};

use super::enums::{Role, Trimester};

/// The signed-in user's profile. One active instance per session:
/// created on login/signup completion, overwritten on re-login,
/// cleared on logout. Never persisted server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub weeks_pregnant: Option<u8>,
    pub due_date: Option<String>, // YYYY-MM-DD
    pub trimester: Option<Trimester>,
    pub previous_pregnancies: Option<String>,
    pub medical_conditions: Option<String>,
    pub allergies: Option<String>,
    pub emergency_contact: Option<String>,
    pub emergency_phone: Option<String>,
    // Doctor-only fields
    pub license_number: Option<String>,
    pub specialization: Option<String>,
}

impl UserProfile {
    /// Minimal profile as produced by sign-in (no questionnaire data).
    pub fn bare(name: String, email: String, role: Role) -> Self {
        Self {
            name,
            email,
            role,
            weeks_pregnant: None,
            due_date: None,
            trimester: None,
            previous_pregnancies: None,
            medical_conditions: None,
            allergies: None,
            emergency_contact: None,
            emergency_phone: None,
            license_number: None,
            specialization: None,
        }
    }
}

/// A roster row as shown on the doctor dashboard. Read-only
/// aggregation over locally cached patient signups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub weeks_pregnant: Option<u8>,
    pub trimester: Option<Trimester>,
    pub due_date: Option<String>,
    pub last_checkin: Option<String>,
    /// Completion percentage recomputed from `weeks_pregnant`.
    pub progress: u8,
}
