//! Pregnancy progress calculator — pure functions from a week count
//! to completion percentage, trimester, and milestone flags.
//!
//! No side effects; everything here is safe to property-test.

use serde::{Deserialize, Serialize};

use crate::models::enums::Trimester;

/// Full term, in weeks. Progress is measured against this.
pub const TOTAL_WEEKS: u8 = 40;

/// Latest selectable week count (overdue pregnancies).
pub const MAX_WEEKS: u8 = 42;

/// Fallback week count when the profile has no week number.
pub const DEFAULT_WEEKS: u8 = 24;

/// Fixed milestone catalog: (week, title).
const MILESTONE_CATALOG: [(u8, &str); 10] = [
    (4, "Heart begins to beat"),
    (8, "All major organs developing"),
    (12, "Baby can make fists"),
    (16, "Baby's sex can be determined"),
    (20, "Halfway there!"),
    (24, "Baby's lungs developing"),
    (28, "Baby can open eyes"),
    (32, "Baby practicing breathing"),
    (36, "Baby is gaining weight"),
    (40, "Full term!"),
];

/// A development milestone with its derived completion flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub week: u8,
    pub title: String,
    pub completed: bool,
}

/// Everything the progress page renders for one week count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReport {
    pub weeks_pregnant: u8,
    pub total_weeks: u8,
    pub percent: f64,
    pub trimester: Trimester,
    pub weeks_remaining: u8,
    pub milestones: Vec<Milestone>,
}

/// Completion percentage for a week count, clamped to [0, 100].
pub fn percent_complete(weeks: u8) -> f64 {
    (f64::from(weeks) / f64::from(TOTAL_WEEKS) * 100.0).clamp(0.0, 100.0)
}

/// Compute the full progress report for a week count.
pub fn compute_progress(weeks: u8) -> ProgressReport {
    let milestones = MILESTONE_CATALOG
        .iter()
        .map(|&(week, title)| Milestone {
            week,
            title: title.to_string(),
            completed: weeks >= week,
        })
        .collect();

    ProgressReport {
        weeks_pregnant: weeks,
        total_weeks: TOTAL_WEEKS,
        percent: percent_complete(weeks),
        trimester: Trimester::from_weeks(weeks),
        weeks_remaining: TOTAL_WEEKS.saturating_sub(weeks),
        milestones,
    }
}
