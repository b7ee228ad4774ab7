//! Pregnancy progress IPC commands.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tauri::State;

use crate::core_state::CoreState;
use crate::models::enums::Role;
use crate::onboarding::DOCTOR_REDIRECT;
use crate::progress::{self, ProgressReport};

/// What the progress page should render. Unauthenticated visitors
/// get a sign-in prompt, never a hard error; doctors are redirected
/// to their dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProgressResponse {
    SignInRequired,
    Redirect { target: String },
    Ready { report: ProgressReport },
}

#[tauri::command]
pub fn get_progress(state: State<'_, Arc<CoreState>>) -> Result<ProgressResponse, String> {
    let session = state.read_session().map_err(|e| e.to_string())?;
    let Some(profile) = session.current() else {
        return Ok(ProgressResponse::SignInRequired);
    };
    if profile.role == Role::Doctor {
        return Ok(ProgressResponse::Redirect {
            target: DOCTOR_REDIRECT.to_string(),
        });
    }

    let weeks = profile.weeks_pregnant.unwrap_or(progress::DEFAULT_WEEKS);
    Ok(ProgressResponse::Ready {
        report: progress::compute_progress(weeks),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{ChatPanel, LocalStore};
    use crate::models::enums::Trimester;
    use crate::models::UserProfile;

    fn test_state() -> (tempfile::TempDir, CoreState) {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("mamacare.db");
        let chat = ChatPanel::new(Arc::new(LocalStore::new(db_path.clone())));
        (dir, CoreState::with_parts(db_path, chat))
    }

    fn response_for(state: &CoreState) -> ProgressResponse {
        let session = state.read_session().unwrap();
        match session.current() {
            None => ProgressResponse::SignInRequired,
            Some(p) if p.role == Role::Doctor => ProgressResponse::Redirect {
                target: DOCTOR_REDIRECT.to_string(),
            },
            Some(p) => ProgressResponse::Ready {
                report: progress::compute_progress(
                    p.weeks_pregnant.unwrap_or(progress::DEFAULT_WEEKS),
                ),
            },
        }
    }

    #[test]
    fn signed_out_gets_signin_prompt() {
        let (_dir, state) = test_state();
        assert!(matches!(
            response_for(&state),
            ProgressResponse::SignInRequired
        ));
    }

    #[test]
    fn doctor_is_redirected_to_dashboard() {
        let (_dir, state) = test_state();
        state.write_session().unwrap().login(UserProfile::bare(
            "Dr. Tariro".into(),
            "tariro@example.com".into(),
            Role::Doctor,
        ));
        let ProgressResponse::Redirect { target } = response_for(&state) else {
            panic!("expected redirect");
        };
        assert_eq!(target, DOCTOR_REDIRECT);
    }

    #[test]
    fn patient_report_uses_profile_weeks() {
        let (_dir, state) = test_state();
        let mut profile =
            UserProfile::bare("Rudo".into(), "rudo@example.com".into(), Role::Patient);
        profile.weeks_pregnant = Some(20);
        profile.trimester = Some(Trimester::Second);
        state.write_session().unwrap().login(profile);

        let ProgressResponse::Ready { report } = response_for(&state) else {
            panic!("expected report");
        };
        assert_eq!(report.weeks_pregnant, 20);
        assert!((report.percent - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn patient_without_weeks_falls_back_to_default() {
        let (_dir, state) = test_state();
        state.write_session().unwrap().login(UserProfile::bare(
            "Rudo".into(),
            "rudo@example.com".into(),
            Role::Patient,
        ));

        let ProgressResponse::Ready { report } = response_for(&state) else {
            panic!("expected report");
        };
        assert_eq!(report.weeks_pregnant, progress::DEFAULT_WEEKS);
    }
}
