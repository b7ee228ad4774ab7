//! Session store — the single authenticated-profile context.
//!
//! All views read the active profile through this object instead of
//! ambient globals; only the onboarding flow and logout write it.
//! Writes are last-writer-wins: a re-login overwrites the previous
//! profile wholesale.

use crate::models::enums::Role;
use crate::models::UserProfile;

#[derive(Default)]
pub struct SessionStore {
    current: Option<UserProfile>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Install a profile as the active session, replacing any
    /// previous one.
    pub fn login(&mut self, profile: UserProfile) {
        tracing::info!(email = %profile.email, role = profile.role.as_str(), "Session login");
        self.current = Some(profile);
    }

    /// Clear the active session. Returns the profile that was signed in.
    pub fn logout(&mut self) -> Option<UserProfile> {
        if let Some(ref profile) = self.current {
            tracing::info!(email = %profile.email, "Session logout");
        }
        self.current.take()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&UserProfile> {
        self.current.as_ref()
    }

    /// Display name of the signed-in user, if any.
    pub fn display_name(&self) -> Option<String> {
        self.current.as_ref().map(|p| p.name.clone())
    }

    /// Role of the signed-in user, if any.
    pub fn role(&self) -> Option<Role> {
        self.current.as_ref().map(|p| p.role)
    }
}
