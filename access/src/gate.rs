//! Render-time access decision for a protected subtree.
//!
//! The gate is a small state machine over the session snapshot. Navigation is
//! edge-triggered: it fires when a state is entered, never on re-evaluation of
//! the state the gate is already in.

use crate::{
    policy::{LOGIN_PATH, UNAUTHORIZED_PATH},
    role::AllowList,
    session::SessionSnapshot,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateState {
    Loading,
    Unauthenticated,
    Unauthorized,
    Authorized,
}

impl GateState {
    pub fn renders_children(self) -> bool {
        matches!(self, GateState::Authorized)
    }

    pub fn navigation_target(self) -> Option<&'static str> {
        match self {
            GateState::Unauthenticated => Some(LOGIN_PATH),
            GateState::Unauthorized => Some(UNAUTHORIZED_PATH),
            GateState::Loading | GateState::Authorized => None,
        }
    }
}

/// Role gate: authenticated users whose role is on the allow-list pass.
pub fn role_gate(session: &SessionSnapshot, allowed: &AllowList) -> GateState {
    if session.is_loading() {
        return GateState::Loading;
    }
    match session.role() {
        None => GateState::Unauthenticated,
        Some(role) if allowed.permits(role) => GateState::Authorized,
        Some(_) => GateState::Unauthorized,
    }
}

/// Redirect-only gate: no role check, and no redirect while already on the
/// login page.
pub fn presence_gate(session: &SessionSnapshot, current_path: &str) -> GateState {
    if session.is_loading() {
        return GateState::Loading;
    }
    if session.is_authenticated() || is_login_path(current_path) {
        GateState::Authorized
    } else {
        GateState::Unauthenticated
    }
}

fn is_login_path(path: &str) -> bool {
    let trimmed = path.trim_end_matches('/');
    trimmed == LOGIN_PATH
}

/// Navigation to perform when moving from `previous` to `current`, if any.
pub fn transition_target(previous: Option<GateState>, current: GateState) -> Option<&'static str> {
    if previous == Some(current) {
        return None;
    }
    current.navigation_target()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{role::Role, session::SessionUser};

    fn signed_in(role: Role) -> SessionSnapshot {
        SessionSnapshot::authenticated(SessionUser {
            id: "u1".into(),
            email: "user@example.com".into(),
            name: None,
            role,
        })
    }

    fn replay(states: &[GateState]) -> Vec<&'static str> {
        let mut previous = None;
        let mut fired = Vec::new();
        for state in states {
            if let Some(target) = transition_target(previous, *state) {
                fired.push(target);
            }
            previous = Some(*state);
        }
        fired
    }

    #[test]
    fn loading_never_navigates() {
        let mut loading_user = signed_in(Role::Employee);
        loading_user.begin_loading();
        for session in [SessionSnapshot::loading(), loading_user] {
            for allowed in [AllowList::any(), AllowList::of(&[Role::Admin])] {
                let state = role_gate(&session, &allowed);
                assert_eq!(state, GateState::Loading);
                assert_eq!(transition_target(None, state), None);
                assert!(!state.renders_children());
            }
        }
    }

    #[test]
    fn unauthenticated_navigates_to_login_once() {
        let state = role_gate(&SessionSnapshot::anonymous(), &AllowList::any());
        assert_eq!(state, GateState::Unauthenticated);
        assert!(!state.renders_children());
        assert_eq!(replay(&[GateState::Loading, state, state, state]), vec!["/login"]);
    }

    #[test]
    fn manager_is_turned_away_from_admin_only_page() {
        let session = signed_in("Manager".parse().unwrap());
        let allowed = AllowList::parse(&["admin"]).unwrap();
        let state = role_gate(&session, &allowed);
        assert_eq!(state, GateState::Unauthorized);
        assert!(!state.renders_children());
        assert_eq!(transition_target(Some(GateState::Loading), state), Some("/unauthorized"));
    }

    #[test]
    fn manager_passes_mixed_case_allow_list() {
        let session = signed_in("Manager".parse().unwrap());
        let allowed = AllowList::parse(&["Manager", "admin"]).unwrap();
        let state = role_gate(&session, &allowed);
        assert_eq!(state, GateState::Authorized);
        assert!(state.renders_children());
        assert_eq!(transition_target(Some(GateState::Loading), state), None);
    }

    #[test]
    fn empty_allow_list_admits_every_role() {
        for role in Role::ALL {
            let state = role_gate(&signed_in(role), &AllowList::any());
            assert_eq!(state, GateState::Authorized);
        }
    }

    #[test]
    fn employee_is_unauthorized_for_management_pages() {
        let allowed = AllowList::parse(&["admin", "manager"]).unwrap();
        let state = role_gate(&signed_in(Role::Employee), &allowed);
        assert_eq!(state, GateState::Unauthorized);
    }

    #[test]
    fn re_entering_a_state_after_leaving_fires_again() {
        use GateState::*;
        let fired = replay(&[Loading, Unauthenticated, Loading, Unauthenticated]);
        assert_eq!(fired, vec!["/login", "/login"]);
    }

    #[test]
    fn presence_gate_skips_redirect_on_login_page() {
        let anonymous = SessionSnapshot::anonymous();
        assert_eq!(presence_gate(&anonymous, "/login"), GateState::Authorized);
        assert_eq!(presence_gate(&anonymous, "/login/"), GateState::Authorized);
        assert_eq!(
            presence_gate(&anonymous, "/employee/tasks"),
            GateState::Unauthenticated
        );
        assert_eq!(
            presence_gate(&SessionSnapshot::loading(), "/employee/tasks"),
            GateState::Loading
        );
        assert_eq!(
            presence_gate(&signed_in(Role::Employee), "/employee/tasks"),
            GateState::Authorized
        );
    }
}
