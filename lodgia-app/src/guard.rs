use lodgia_session::SessionStore;
use std::sync::Arc;

use crate::effects::Navigator;

/// What the guard decided for the protected surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Not mounted yet; render a neutral loading placeholder, never a
    /// premature redirect.
    Pending,
    Allow,
    /// No live session.
    RedirectToLogin,
    /// Authenticated but lacking the required role.
    RedirectHome,
}

/// Gates a protected surface behind a live session with a specific role.
/// The check runs only after `mount`, so a restore-in-progress session is
/// never misread as logged out.
pub struct RoleGuard {
    session: Arc<SessionStore>,
    required_role: String,
    mounted: bool,
}

impl RoleGuard {
    pub fn new(session: Arc<SessionStore>, required_role: impl Into<String>) -> Self {
        Self {
            session,
            required_role: required_role.into(),
            mounted: false,
        }
    }

    /// Marks the guard mounted and drives the redirect, if any, through
    /// the navigator. Returns the decision so the caller can render.
    pub fn mount(&mut self, navigator: &dyn Navigator) -> GuardOutcome {
        self.mounted = true;
        let outcome = self.outcome();
        match outcome {
            GuardOutcome::RedirectToLogin => navigator.navigate("/login"),
            GuardOutcome::RedirectHome => navigator.navigate("/"),
            GuardOutcome::Allow | GuardOutcome::Pending => {}
        }
        outcome
    }

    /// Expiry is evicted on read, so a session that lapsed while the page
    /// sat idle resolves to a login redirect, not a stale allow.
    pub fn outcome(&self) -> GuardOutcome {
        if !self.mounted {
            return GuardOutcome::Pending;
        }
        if !self.session.is_authenticated() {
            return GuardOutcome::RedirectToLogin;
        }
        match self.session.current_user() {
            Some(user) if user.role == self.required_role => GuardOutcome::Allow,
            _ => GuardOutcome::RedirectHome,
        }
    }
}
