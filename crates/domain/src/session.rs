//! Session state as seen by the rest of the application.

use serde::Serialize;

use crate::auth::{Role, UserProfile};

/// The session state machine.
///
/// `Unknown` is the initial state, before the startup resolution pass has
/// determined whether a stored token is still accepted by the server.
/// Pages render this state; only the session manager mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum SessionState {
    /// No determination made yet; the resolution pass (or a login) is in
    /// flight.
    #[default]
    Unknown,
    /// A token is stored and was accepted by the server.
    Authenticated {
        /// The resolved caller identity.
        user: UserProfile,
    },
    /// No token, or the token was invalidated.
    Unauthenticated,
}

impl SessionState {
    /// Whether a live session is established.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Whether the state is still being resolved.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// The authenticated caller, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&UserProfile> {
        match self {
            Self::Authenticated { user } => Some(user),
            _ => None,
        }
    }

    /// Whether the caller holds the given role.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.user().is_some_and(|user| user.role == role)
    }

    /// Gate for the user-administration page: admins only.
    #[must_use]
    pub fn can_manage_users(&self) -> bool {
        self.user().is_some_and(|user| user.role.is_admin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_loading() {
        let state = SessionState::default();
        assert!(state.is_loading());
        assert!(!state.is_authenticated());
        assert!(state.user().is_none());
    }

    #[test]
    fn authenticated_state_exposes_user() {
        let state = SessionState::Authenticated {
            user: UserProfile::placeholder(),
        };
        assert!(state.is_authenticated());
        assert!(!state.is_loading());
        assert_eq!(state.user().map(|u| u.username.as_str()), Some("admin"));
    }

    #[test]
    fn admin_gate_requires_admin_role() {
        let mut user = UserProfile::placeholder();
        let admin = SessionState::Authenticated { user: user.clone() };
        assert!(admin.can_manage_users());

        user.role = Role::Supervisor;
        let supervisor = SessionState::Authenticated { user };
        assert!(!supervisor.can_manage_users());
        assert!(supervisor.has_role(Role::Supervisor));

        assert!(!SessionState::Unauthenticated.can_manage_users());
    }
}
