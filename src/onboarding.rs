//! Onboarding flow controller — the sign-in/sign-up state machine.
//!
//! Drives the sequence role selection → credentials → role-specific
//! questionnaire → trimester selection (patient signups with a week
//! count only) → completion. Completion produces a `UserProfile` and
//! a role-based redirect target; the command layer writes the profile
//! into the session store and, for patient signups, the roster cache.
//!
//! There is no credential verification: any email/password pair is
//! accepted. Validation is limited to required-field presence.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::enums::{Role, Trimester};
use crate::models::UserProfile;
use crate::timer::ViewTimer;

/// How long the transient welcome overlay stays up before the
/// role-based redirect fires.
pub const WELCOME_OVERLAY_MILLIS: u64 = 3000;

/// Redirect targets after completion.
pub const DOCTOR_REDIRECT: &str = "/doctor-dashboard";
pub const PATIENT_REDIRECT: &str = "/daily-checkin";

// ═══════════════════════════════════════════
// Flow types
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowState {
    RoleSelect,
    Credentials,
    Questionnaire,
    TrimesterSelect,
    Complete,
}

impl FlowState {
    fn name(&self) -> &'static str {
        match self {
            FlowState::RoleSelect => "role_select",
            FlowState::Credentials => "credentials",
            FlowState::Questionnaire => "questionnaire",
            FlowState::TrimesterSelect => "trimester_select",
            FlowState::Complete => "complete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    SignIn,
    SignUp,
}

/// Credentials step input. `name` is required for signups; on sign-in
/// a missing name is synthesized from the email local-part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsForm {
    pub mode: AuthMode,
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

/// Patient questionnaire input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientDetails {
    pub weeks_pregnant: Option<u8>,
    pub due_date: Option<String>,
    pub previous_pregnancies: Option<String>,
    pub medical_conditions: Option<String>,
    pub allergies: Option<String>,
    pub emergency_contact: Option<String>,
    pub emergency_phone: Option<String>,
}

/// Doctor questionnaire input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorDetails {
    pub license_number: String,
    pub specialization: String,
}

/// Produced when the flow reaches `Complete`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    pub profile: UserProfile,
    pub redirect: String,
}

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Cannot {action} while in the {state} step")]
    InvalidTransition {
        state: &'static str,
        action: &'static str,
    },

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Weeks pregnant must be between 1 and 42, got {0}")]
    WeeksOutOfRange(u8),
}

// ═══════════════════════════════════════════
// Flow controller
// ═══════════════════════════════════════════

/// Accumulated profile draft across flow steps.
#[derive(Debug, Clone, Default)]
struct ProfileDraft {
    role: Option<Role>,
    name: Option<String>,
    email: Option<String>,
    patient: PatientDetails,
}

pub struct OnboardingFlow {
    state: FlowState,
    draft: ProfileDraft,
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self {
            state: FlowState::RoleSelect,
            draft: ProfileDraft::default(),
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn role(&self) -> Option<Role> {
        self.draft.role
    }

    /// Pick the account type. Allowed from the initial step, from the
    /// credentials step ("change account type"), and after completion
    /// (starting a fresh login).
    pub fn select_role(&mut self, role: Role) -> Result<(), FlowError> {
        match self.state {
            FlowState::RoleSelect | FlowState::Credentials | FlowState::Complete => {
                self.draft = ProfileDraft::default();
                self.draft.role = Some(role);
                self.state = FlowState::Credentials;
                Ok(())
            }
            _ => Err(self.invalid("select a role")),
        }
    }

    /// Submit the credentials form.
    ///
    /// Sign-in completes immediately (no profile data beyond the
    /// derived display name); sign-up advances to the questionnaire.
    pub fn submit_credentials(
        &mut self,
        form: CredentialsForm,
    ) -> Result<Option<Completion>, FlowError> {
        if self.state != FlowState::Credentials {
            return Err(self.invalid("submit credentials"));
        }
        if form.email.trim().is_empty() {
            return Err(FlowError::MissingField("Email"));
        }
        if form.password.trim().is_empty() {
            return Err(FlowError::MissingField("Password"));
        }

        let role = self.draft.role.unwrap_or(Role::Patient);
        match form.mode {
            AuthMode::SignIn => {
                let name = match form.name.filter(|n| !n.trim().is_empty()) {
                    Some(n) => n.trim().to_string(),
                    None => derive_display_name(&form.email),
                };
                let profile = UserProfile::bare(name, form.email.trim().to_string(), role);
                self.state = FlowState::Complete;
                Ok(Some(completion(profile)))
            }
            AuthMode::SignUp => {
                let name = form
                    .name
                    .filter(|n| !n.trim().is_empty())
                    .ok_or(FlowError::MissingField("Full name"))?;
                self.draft.name = Some(name.trim().to_string());
                self.draft.email = Some(form.email.trim().to_string());
                self.state = FlowState::Questionnaire;
                Ok(None)
            }
        }
    }

    /// Submit the patient questionnaire. A present week count routes
    /// through explicit trimester selection; otherwise the signup
    /// completes with no trimester.
    pub fn submit_patient_details(
        &mut self,
        details: PatientDetails,
    ) -> Result<Option<Completion>, FlowError> {
        if self.state != FlowState::Questionnaire || self.draft.role != Some(Role::Patient) {
            return Err(self.invalid("submit pregnancy details"));
        }
        if let Some(weeks) = details.weeks_pregnant {
            if !(1..=42).contains(&weeks) {
                return Err(FlowError::WeeksOutOfRange(weeks));
            }
        }

        self.draft.patient = details;
        if self.draft.patient.weeks_pregnant.is_some() {
            self.state = FlowState::TrimesterSelect;
            Ok(None)
        } else {
            let profile = self.build_patient_profile(None);
            self.state = FlowState::Complete;
            Ok(Some(completion(profile)))
        }
    }

    /// Submit the doctor questionnaire and complete.
    pub fn submit_doctor_details(
        &mut self,
        details: DoctorDetails,
    ) -> Result<Completion, FlowError> {
        if self.state != FlowState::Questionnaire || self.draft.role != Some(Role::Doctor) {
            return Err(self.invalid("submit professional details"));
        }
        if details.license_number.trim().is_empty() {
            return Err(FlowError::MissingField("Medical license number"));
        }
        if details.specialization.trim().is_empty() {
            return Err(FlowError::MissingField("Specialization"));
        }

        let mut profile = UserProfile::bare(
            self.draft.name.clone().unwrap_or_default(),
            self.draft.email.clone().unwrap_or_default(),
            Role::Doctor,
        );
        profile.license_number = Some(details.license_number.trim().to_string());
        profile.specialization = Some(details.specialization.trim().to_string());
        self.state = FlowState::Complete;
        Ok(completion(profile))
    }

    /// Explicit trimester pick. The user's choice wins over the value
    /// derived from the week count.
    pub fn select_trimester(&mut self, trimester: Trimester) -> Result<Completion, FlowError> {
        if self.state != FlowState::TrimesterSelect {
            return Err(self.invalid("select a trimester"));
        }
        let profile = self.build_patient_profile(Some(trimester));
        self.state = FlowState::Complete;
        Ok(completion(profile))
    }

    /// Step back: questionnaire → credentials, credentials → role select.
    pub fn go_back(&mut self) -> Result<(), FlowError> {
        self.state = match self.state {
            FlowState::Credentials => FlowState::RoleSelect,
            FlowState::Questionnaire => FlowState::Credentials,
            FlowState::TrimesterSelect => FlowState::Questionnaire,
            _ => return Err(self.invalid("go back")),
        };
        Ok(())
    }

    fn build_patient_profile(&self, explicit_trimester: Option<Trimester>) -> UserProfile {
        let details = &self.draft.patient;
        let mut profile = UserProfile::bare(
            self.draft.name.clone().unwrap_or_default(),
            self.draft.email.clone().unwrap_or_default(),
            Role::Patient,
        );
        profile.weeks_pregnant = details.weeks_pregnant;
        profile.due_date = details.due_date.clone();
        profile.trimester =
            explicit_trimester.or_else(|| details.weeks_pregnant.map(Trimester::from_weeks));
        profile.previous_pregnancies = details.previous_pregnancies.clone();
        profile.medical_conditions = details.medical_conditions.clone();
        profile.allergies = details.allergies.clone();
        profile.emergency_contact = details.emergency_contact.clone();
        profile.emergency_phone = details.emergency_phone.clone();
        profile
    }

    fn invalid(&self, action: &'static str) -> FlowError {
        FlowError::InvalidTransition {
            state: self.state.name(),
            action,
        }
    }
}

fn completion(profile: UserProfile) -> Completion {
    let redirect = match profile.role {
        Role::Doctor => DOCTOR_REDIRECT,
        Role::Patient => PATIENT_REDIRECT,
    };
    Completion {
        profile,
        redirect: redirect.to_string(),
    }
}

/// Synthesize a display name from the email local-part, first letter
/// capitalized ("rudo.m@example.com" → "Rudo.m").
pub fn derive_display_name(email: &str) -> String {
    let local = email.trim().split('@').next().unwrap_or_default();
    let mut chars = local.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => local.to_string(),
    }
}

// ═══════════════════════════════════════════
// Welcome overlay
// ═══════════════════════════════════════════

/// Transient post-login overlay with a fixed-duration auto-dismiss.
///
/// The dismiss timer is cancelled when the overlay is dismissed
/// manually or the owning view is torn down, so a stale timer can
/// never clear a newer overlay.
pub struct WelcomeOverlay {
    slot: Arc<Mutex<Option<String>>>,
    timer: Option<ViewTimer>,
}

impl Default for WelcomeOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl WelcomeOverlay {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
            timer: None,
        }
    }

    /// Show the overlay for `name` and schedule auto-dismiss.
    pub fn show(&mut self, name: &str) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
        *self.slot.lock().expect("overlay slot") = Some(name.to_string());

        let slot = self.slot.clone();
        self.timer = Some(ViewTimer::once(
            Duration::from_millis(WELCOME_OVERLAY_MILLIS),
            move || {
                *slot.lock().expect("overlay slot") = None;
            },
        ));
    }

    /// Dismiss immediately and cancel the pending timer.
    pub fn dismiss(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
        *self.slot.lock().expect("overlay slot") = None;
    }

    /// Name currently shown, if the overlay is up.
    pub fn current(&self) -> Option<String> {
        self.slot.lock().expect("overlay slot").clone()
    }
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn signin(email: &str) -> CredentialsForm {
        CredentialsForm {
            mode: AuthMode::SignIn,
            name: None,
            email: email.into(),
            password: "hunter2".into(),
        }
    }

    fn signup(name: &str, email: &str) -> CredentialsForm {
        CredentialsForm {
            mode: AuthMode::SignUp,
            name: Some(name.into()),
            email: email.into(),
            password: "hunter2".into(),
        }
    }

    // ── Display name derivation ──

    #[test]
    fn display_name_from_email_local_part() {
        assert_eq!(derive_display_name("rudo@example.com"), "Rudo");
        assert_eq!(derive_display_name("tariro.m@example.com"), "Tariro.m");
    }

    #[test]
    fn display_name_empty_email() {
        assert_eq!(derive_display_name(""), "");
    }

    // ── Sign-in path ──

    #[test]
    fn signin_completes_with_derived_name() {
        let mut flow = OnboardingFlow::new();
        flow.select_role(Role::Patient).unwrap();
        let completion = flow.submit_credentials(signin("rudo@example.com")).unwrap();

        let completion = completion.expect("sign-in completes immediately");
        assert_eq!(completion.profile.name, "Rudo");
        assert_eq!(completion.profile.role, Role::Patient);
        assert_eq!(completion.redirect, PATIENT_REDIRECT);
        assert_eq!(flow.state(), FlowState::Complete);
    }

    #[test]
    fn signin_keeps_supplied_name() {
        let mut flow = OnboardingFlow::new();
        flow.select_role(Role::Doctor).unwrap();
        let mut form = signin("tariro@example.com");
        form.name = Some("Dr. Tariro".into());
        let completion = flow.submit_credentials(form).unwrap().unwrap();

        assert_eq!(completion.profile.name, "Dr. Tariro");
        assert_eq!(completion.redirect, DOCTOR_REDIRECT);
    }

    #[test]
    fn signin_requires_email_and_password() {
        let mut flow = OnboardingFlow::new();
        flow.select_role(Role::Patient).unwrap();

        let mut form = signin("");
        assert!(matches!(
            flow.submit_credentials(form.clone()),
            Err(FlowError::MissingField("Email"))
        ));

        form.email = "rudo@example.com".into();
        form.password = "  ".into();
        assert!(matches!(
            flow.submit_credentials(form),
            Err(FlowError::MissingField("Password"))
        ));
        assert_eq!(flow.state(), FlowState::Credentials);
    }

    // ── Patient signup path ──

    #[test]
    fn patient_signup_with_weeks_routes_through_trimester_select() {
        let mut flow = OnboardingFlow::new();
        flow.select_role(Role::Patient).unwrap();
        assert!(flow
            .submit_credentials(signup("Rudo", "rudo@example.com"))
            .unwrap()
            .is_none());
        assert_eq!(flow.state(), FlowState::Questionnaire);

        let details = PatientDetails {
            weeks_pregnant: Some(20),
            due_date: Some("2025-11-01".into()),
            ..Default::default()
        };
        assert!(flow.submit_patient_details(details).unwrap().is_none());
        assert_eq!(flow.state(), FlowState::TrimesterSelect);

        // Explicit choice wins over the derived value (20 weeks → second).
        let completion = flow.select_trimester(Trimester::Third).unwrap();
        assert_eq!(completion.profile.trimester, Some(Trimester::Third));
        assert_eq!(completion.profile.weeks_pregnant, Some(20));
        assert_eq!(completion.redirect, PATIENT_REDIRECT);
    }

    #[test]
    fn patient_signup_explicit_second_trimester() {
        let mut flow = OnboardingFlow::new();
        flow.select_role(Role::Patient).unwrap();
        flow.submit_credentials(signup("Rudo", "rudo@example.com"))
            .unwrap();
        flow.submit_patient_details(PatientDetails {
            weeks_pregnant: Some(20),
            ..Default::default()
        })
        .unwrap();

        let completion = flow.select_trimester(Trimester::Second).unwrap();
        assert_eq!(completion.profile.trimester, Some(Trimester::Second));
    }

    #[test]
    fn patient_signup_without_weeks_completes_directly() {
        let mut flow = OnboardingFlow::new();
        flow.select_role(Role::Patient).unwrap();
        flow.submit_credentials(signup("Chipo", "chipo@example.com"))
            .unwrap();

        let completion = flow
            .submit_patient_details(PatientDetails::default())
            .unwrap()
            .expect("completes without trimester selection");
        assert_eq!(completion.profile.trimester, None);
        assert_eq!(flow.state(), FlowState::Complete);
    }

    #[test]
    fn patient_signup_rejects_out_of_range_weeks() {
        let mut flow = OnboardingFlow::new();
        flow.select_role(Role::Patient).unwrap();
        flow.submit_credentials(signup("Rudo", "rudo@example.com"))
            .unwrap();

        let result = flow.submit_patient_details(PatientDetails {
            weeks_pregnant: Some(43),
            ..Default::default()
        });
        assert!(matches!(result, Err(FlowError::WeeksOutOfRange(43))));
        assert_eq!(flow.state(), FlowState::Questionnaire);
    }

    #[test]
    fn signup_requires_name() {
        let mut flow = OnboardingFlow::new();
        flow.select_role(Role::Patient).unwrap();
        let mut form = signup("", "rudo@example.com");
        form.name = None;
        assert!(matches!(
            flow.submit_credentials(form),
            Err(FlowError::MissingField("Full name"))
        ));
    }

    // ── Doctor signup path ──

    #[test]
    fn doctor_signup_completes_with_credentials_and_details() {
        let mut flow = OnboardingFlow::new();
        flow.select_role(Role::Doctor).unwrap();
        flow.submit_credentials(signup("Dr. Tariro", "tariro@example.com"))
            .unwrap();

        let completion = flow
            .submit_doctor_details(DoctorDetails {
                license_number: "MD-12345".into(),
                specialization: "obstetrics".into(),
            })
            .unwrap();

        assert_eq!(completion.profile.role, Role::Doctor);
        assert_eq!(completion.profile.license_number.as_deref(), Some("MD-12345"));
        assert_eq!(completion.redirect, DOCTOR_REDIRECT);
    }

    #[test]
    fn doctor_details_require_license() {
        let mut flow = OnboardingFlow::new();
        flow.select_role(Role::Doctor).unwrap();
        flow.submit_credentials(signup("Dr. Tariro", "tariro@example.com"))
            .unwrap();

        let result = flow.submit_doctor_details(DoctorDetails {
            license_number: " ".into(),
            specialization: "obstetrics".into(),
        });
        assert!(matches!(
            result,
            Err(FlowError::MissingField("Medical license number"))
        ));
    }

    #[test]
    fn doctor_cannot_submit_patient_questionnaire() {
        let mut flow = OnboardingFlow::new();
        flow.select_role(Role::Doctor).unwrap();
        flow.submit_credentials(signup("Dr. Tariro", "tariro@example.com"))
            .unwrap();

        assert!(flow
            .submit_patient_details(PatientDetails::default())
            .is_err());
    }

    // ── Transition guards ──

    #[test]
    fn credentials_before_role_is_rejected() {
        let mut flow = OnboardingFlow::new();
        assert!(matches!(
            flow.submit_credentials(signin("rudo@example.com")),
            Err(FlowError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn role_reselect_after_complete_restarts() {
        let mut flow = OnboardingFlow::new();
        flow.select_role(Role::Patient).unwrap();
        flow.submit_credentials(signin("rudo@example.com")).unwrap();
        assert_eq!(flow.state(), FlowState::Complete);

        flow.select_role(Role::Doctor).unwrap();
        assert_eq!(flow.state(), FlowState::Credentials);
        assert_eq!(flow.role(), Some(Role::Doctor));
    }

    #[test]
    fn go_back_walks_towards_role_select() {
        let mut flow = OnboardingFlow::new();
        flow.select_role(Role::Patient).unwrap();
        flow.submit_credentials(signup("Rudo", "rudo@example.com"))
            .unwrap();

        flow.go_back().unwrap();
        assert_eq!(flow.state(), FlowState::Credentials);
        flow.go_back().unwrap();
        assert_eq!(flow.state(), FlowState::RoleSelect);
        assert!(flow.go_back().is_err());
    }

    // ── Welcome overlay ──

    #[tokio::test(start_paused = true)]
    async fn overlay_auto_dismisses_after_duration() {
        let mut overlay = WelcomeOverlay::new();
        overlay.show("Rudo");
        assert_eq!(overlay.current().as_deref(), Some("Rudo"));

        tokio::time::sleep(Duration::from_millis(WELCOME_OVERLAY_MILLIS + 100)).await;
        assert!(overlay.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn overlay_manual_dismiss_cancels_timer() {
        let mut overlay = WelcomeOverlay::new();
        overlay.show("Rudo");
        overlay.dismiss();
        assert!(overlay.current().is_none());

        // A later re-show must not be clobbered by the first timer.
        overlay.show("Tariro");
        tokio::time::sleep(Duration::from_millis(WELCOME_OVERLAY_MILLIS - 500)).await;
        assert_eq!(overlay.current().as_deref(), Some("Tariro"));
    }
}
